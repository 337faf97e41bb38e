use rlife_lib::{
    BlankSeed, Boundary, Config, Error, GlyphRenderer, Grid, RandomSeed, Renderer, RleRenderer,
    SeedProvider,
};
use std::error::Error as StdError;

const GLIDER: &str = ".o.\n..o\nooo\n";

fn glider() -> Grid {
    Grid::new(3, 3, |row, col| GLIDER.lines().nth(row).unwrap().as_bytes()[col] == b'o').unwrap()
}

#[test]
fn plaintext() {
    assert_eq!(GlyphRenderer::plaintext().render(&glider()), GLIDER);
    assert_eq!(GlyphRenderer::default(), GlyphRenderer::plaintext());
}

#[test]
fn hearts() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::new(2, 1, |_, col| col == 0)?;
    assert_eq!(GlyphRenderer::hearts().render(&grid), "❤ ☠ \n");
    Ok(())
}

#[test]
fn rle() -> Result<(), Box<dyn StdError>> {
    assert_eq!(
        RleRenderer.render(&glider()),
        "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n"
    );

    let sparse = Grid::new(6, 5, |row, col| (row, col) == (1, 1) || (row, col) == (3, 0))?;
    assert_eq!(
        RleRenderer.render(&sparse),
        "x = 6, y = 5, rule = B3/S23\n$bo2$o!\n"
    );

    assert_eq!(
        RleRenderer.render(&Grid::blank(4, 4)?),
        "x = 4, y = 4, rule = B3/S23\n!\n"
    );
    Ok(())
}

#[test]
fn rle_wraps_long_lines() -> Result<(), Box<dyn StdError>> {
    let checkerboard = Grid::new(100, 2, |row, col| (row + col) % 2 == 0)?;
    let rle = RleRenderer.render(&checkerboard);
    assert!(rle.lines().all(|line| line.len() <= 70));
    assert!(rle.trim_end().ends_with('!'));
    Ok(())
}

#[test]
fn random_seed() -> Result<(), Box<dyn StdError>> {
    let first = RandomSeed::new(Some(7), 0.5)?.produce(30, 20)?;
    let second = RandomSeed::new(Some(7), 0.5)?.produce(30, 20)?;
    assert_eq!(first, second);
    assert!(first.population() > 0 && first.population() < 600);

    assert!(RandomSeed::new(None, 0.0)?.produce(8, 8)?.is_empty());
    assert_eq!(RandomSeed::new(None, 1.0)?.produce(8, 8)?.population(), 64);
    assert_eq!(
        RandomSeed::new(None, 1.5).map(|_| ()),
        Err(Error::InvalidFillRate(1.5))
    );
    Ok(())
}

#[test]
fn blank_seed() -> Result<(), Box<dyn StdError>> {
    assert_eq!(BlankSeed.produce(4, 3)?, Grid::blank(4, 3)?);
    assert!(BlankSeed.produce(0, 3).is_err());
    Ok(())
}

#[test]
fn config_fill_rate() -> Result<(), Box<dyn StdError>> {
    let simulation = Config::new(10, 6).set_fill_rate(1.0).simulation()?;
    assert_eq!(simulation.current().population(), 60);
    assert_eq!(simulation.generation(), 0);
    assert_eq!(simulation.boundary(), Boundary::Clipped);

    let config = Config::new(10, 6).set_fill_rate(-0.1);
    assert_eq!(
        config.simulation().map(|_| ()),
        Err(Error::InvalidFillRate(-0.1))
    );
    Ok(())
}

#[test]
fn boundary_names() {
    assert_eq!("clipped".parse(), Ok(Boundary::Clipped));
    assert_eq!("plane".parse(), Ok(Boundary::Clipped));
    assert_eq!("wrap".parse(), Ok(Boundary::Torus));
    assert!("klein".parse::<Boundary>().is_err());
    assert_eq!(Boundary::Torus.to_string(), "torus");
    assert_eq!(Boundary::default(), Boundary::Clipped);
}

#[test]
#[cfg(feature = "serde")]
fn grid_serde() -> Result<(), Box<dyn StdError>> {
    let json = serde_json::to_string(&glider())?;
    assert_eq!(
        json,
        r#"{"width":3,"height":3,"rows":[".o.","..o","ooo"]}"#
    );
    assert_eq!(serde_json::from_str::<Grid>(&json)?, glider());

    assert!(serde_json::from_str::<Grid>(r#"{"width":3,"height":1,"rows":[".o"]}"#).is_err());
    assert!(serde_json::from_str::<Grid>(r#"{"width":2,"height":2,"rows":[".o"]}"#).is_err());
    assert!(serde_json::from_str::<Grid>(r#"{"width":2,"height":1,"rows":[".x"]}"#).is_err());

    let huge = r#"{"width":4294967296,"height":4294967296,"rows":[]}"#;
    assert!(serde_json::from_str::<Grid>(huge).is_err());
    let huge = r#"{"width":4294967296,"height":4294967296,"rows":[".o"]}"#;
    assert!(serde_json::from_str::<Grid>(huge).is_err());
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn config_serde() -> Result<(), Box<dyn StdError>> {
    let config: Config = serde_json::from_str(r#"{"width": 12, "boundary": "torus"}"#)?;
    assert_eq!(
        config,
        Config::new(12, 30).set_boundary(Boundary::Torus)
    );

    let config = Config::new(8, 8).set_seed(Some(3)).set_fill_rate(0.25);
    let json = serde_json::to_string(&config)?;
    assert_eq!(serde_json::from_str::<Config>(&json)?, config);
    Ok(())
}

#[test]
#[cfg(feature = "read-rle")]
fn pattern_seed_rle() -> Result<(), Box<dyn StdError>> {
    use rlife_lib::PatternSeed;

    let mut seed = PatternSeed::parse("#N Glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n")?;
    assert_eq!((seed.width(), seed.height(), seed.population()), (3, 3, 5));
    let grid = seed.produce(5, 5)?;
    assert_eq!(
        grid.alive_cells().collect::<Vec<_>>(),
        vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
    );

    assert_eq!(
        seed.produce(2, 5),
        Err(Error::PatternTooLarge {
            width: 3,
            height: 3
        })
    );
    assert_eq!(
        seed.produce(0, 5),
        Err(Error::InvalidDimension {
            width: 0,
            height: 5
        })
    );
    assert!(matches!(
        seed.produce(usize::MAX, 2),
        Err(Error::TooManyCells { .. })
    ));
    Ok(())
}

#[test]
#[cfg(feature = "read-rle")]
fn pattern_seed_plaintext() -> Result<(), Box<dyn StdError>> {
    use rlife_lib::PatternSeed;

    let config = Config::new(5, 5).set_pattern(String::from("!Name: Blinker\nOOO\n"));
    let simulation = config.simulation()?;
    assert_eq!(
        simulation.current().alive_cells().collect::<Vec<_>>(),
        vec![(2, 1), (2, 2), (2, 3)]
    );

    let seed = PatternSeed::parse(".O\n..O\nOOO\n")?;
    assert_eq!((seed.width(), seed.height(), seed.population()), (3, 3, 5));
    Ok(())
}
