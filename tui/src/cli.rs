//! Running without the TUI.

use crate::args::Args;
use log::warn;
use rlife_lib::{GlyphRenderer, Renderer, RleRenderer, Simulation};
use std::{
    error::Error,
    io::{self, IsTerminal, Write},
    thread,
};

#[cfg(feature = "tui")]
use crate::tui::run_with_tui;
#[cfg(feature = "tui")]
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Runs the simulation, with or without the TUI.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            return run_with_tui(args);
        }
    }
    if args.rle {
        run_to_rle(args)
    } else {
        run_printing(args)
    }
}

/// Whether to stop early because the simulation became still.
pub(crate) fn stop_when_still(enabled: bool, simulation: &Simulation) -> bool {
    if enabled && simulation.is_still() {
        warn!(
            "stopped at generation {}: nothing changes any more",
            simulation.generation()
        );
        true
    } else {
        false
    }
}

/// Advances one generation, unless the run is over.
///
/// The run is over after `generations` ticks, or, when `still` is set,
/// as soon as nothing changes any more. Returns whether it advanced.
pub(crate) fn tick(simulation: &mut Simulation, generations: u64, still: bool) -> bool {
    if simulation.generation() >= generations || stop_when_still(still, simulation) {
        return false;
    }
    simulation.advance();
    true
}

/// Runs all the generations silently, then prints the last one in RLE.
fn run_to_rle(args: Args) -> Result<(), Box<dyn Error>> {
    let mut simulation = args.simulation;
    while tick(&mut simulation, args.generations, args.stop_when_still) {}
    print!("{}", RleRenderer.render(simulation.current()));
    Ok(())
}

/// Prints every generation, clearing the screen in between.
fn run_printing(args: Args) -> Result<(), Box<dyn Error>> {
    let Args {
        mut simulation,
        renderer,
        ..
    } = args;
    let clear = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();

    loop {
        let clear = clear && simulation.generation() > 0;
        print_generation(&mut stdout, &renderer, &simulation, clear)?;
        thread::sleep(args.delay);
        if !tick(&mut simulation, args.generations, args.stop_when_still) {
            return Ok(());
        }
    }
}

fn print_generation<W: Write>(
    out: &mut W,
    renderer: &GlyphRenderer,
    simulation: &Simulation,
    clear: bool,
) -> io::Result<()> {
    #[cfg(feature = "tui")]
    if clear {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    } else if simulation.generation() > 0 {
        writeln!(out)?;
    }
    #[cfg(not(feature = "tui"))]
    if clear || simulation.generation() > 0 {
        writeln!(out)?;
    }
    writeln!(
        out,
        "Gen: {}  Cells: {}",
        simulation.generation(),
        simulation.current().population()
    )?;
    write!(out, "{}", renderer.render(simulation.current()))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlife_lib::Grid;

    fn simulation(rows: &[&str]) -> Simulation {
        let width = rows[0].len();
        let grid = Grid::new(width, rows.len(), |row, col| rows[row].as_bytes()[col] == b'o');
        Simulation::new(grid.unwrap())
    }

    fn blinker() -> Simulation {
        simulation(&[".....", ".....", ".ooo.", ".....", "....."])
    }

    fn block() -> Simulation {
        simulation(&["....", ".oo.", ".oo.", "...."])
    }

    #[test]
    fn stops_after_generations() {
        let mut sim = blinker();
        let mut ticks = 0;
        while tick(&mut sim, 3, true) {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(sim.generation(), 3);

        let mut sim = blinker();
        assert!(!tick(&mut sim, 0, false));
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn stops_when_still() {
        let mut sim = block();
        assert!(!stop_when_still(true, &sim));
        assert!(tick(&mut sim, 100, true));
        assert!(sim.is_still());
        assert!(stop_when_still(true, &sim));
        assert!(!stop_when_still(false, &sim));
        assert!(!tick(&mut sim, 100, true));
        assert_eq!(sim.generation(), 1);

        let mut sim = block();
        while tick(&mut sim, 100, false) {}
        assert_eq!(sim.generation(), 100);
    }
}
