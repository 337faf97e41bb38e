use crate::{args::Args, cli::tick};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::error;
use rlife_lib::{GlyphRenderer, Renderer, Simulation};
use std::{
    error::Error,
    io::{self, Stdout, Write},
    time::Duration,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
}

struct LifeWindow {
    simulation: Simulation,
    renderer: GlyphRenderer,
    status: Status,
    generations: u64,
    delay: Duration,
    stop_when_still: bool,

    /// Width and height of the terminal.
    size: (u16, u16),
    stdout: Stdout,
}

impl LifeWindow {
    fn new(args: Args) -> io::Result<Self> {
        Ok(LifeWindow {
            simulation: args.simulation,
            renderer: args.renderer,
            status: Status::Paused,
            generations: args.generations,
            delay: args.delay,
            stop_when_still: args.stop_when_still,
            size: terminal::size()?,
            stdout: io::stdout(),
        })
    }

    fn bar(&mut self, y: u16, text: &str) -> io::Result<()> {
        let width = self.size.0 as usize;
        let text: String = text.chars().take(width).collect();
        queue!(
            self.stdout,
            MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(format!("{:<width$}", text, width = width)),
            SetAttribute(Attribute::Reset)
        )
    }

    fn status_str(&self) -> &'static str {
        match self.status {
            Status::Running => "Running... Press [space] to pause, [q] to quit.",
            Status::Paused => {
                "Paused. Press [space] to resume, [n] or [→] for one step, [q] to quit."
            }
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let (width, height) = (self.size.0 as usize, self.size.1);
        queue!(self.stdout, Clear(ClearType::All))?;
        let top = format!(
            "Gen: {}  Cells: {}  Boundary: {}",
            self.simulation.generation(),
            self.simulation.current().population(),
            self.simulation.boundary()
        );
        self.bar(0, &top)?;

        let world = self.renderer.render(self.simulation.current());
        for (y, line) in world.lines().take(height.saturating_sub(2) as usize).enumerate() {
            let line: String = line.chars().take(width).collect();
            queue!(self.stdout, MoveTo(0, y as u16 + 1), Print(line))?;
        }

        let status = self.status_str();
        self.bar(height.saturating_sub(1), status)?;
        self.stdout.flush()
    }

    /// Pauses once all the requested generations are done,
    /// or once nothing changes any more.
    fn step(&mut self) {
        if !tick(&mut self.simulation, self.generations, self.stop_when_still) {
            self.status = Status::Paused;
        }
    }

    fn quit(&mut self) -> io::Result<bool> {
        let y = self.size.1.saturating_sub(1);
        self.bar(y, "Are you sure to quit? [Y/n]")?;
        self.stdout.flush()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(matches!(
                        key.code,
                        KeyCode::Char('Y') | KeyCode::Char('y') | KeyCode::Enter
                    ));
                }
            }
        }
    }

    /// Handles a key press. Returns `true` when it is time to quit.
    fn key(&mut self, key: KeyEvent) -> io::Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => match self.status {
                Status::Running => {
                    self.status = Status::Paused;
                    if self.quit()? {
                        return Ok(true);
                    }
                }
                Status::Paused => return Ok(true),
            },
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.status = match self.status {
                    Status::Running => Status::Paused,
                    Status::Paused => Status::Running,
                };
            }
            KeyCode::Right | KeyCode::Char('n') if self.status == Status::Paused => {
                self.simulation.advance();
            }
            _ => (),
        }
        self.update()?;
        Ok(false)
    }

    fn run(&mut self) -> io::Result<()> {
        self.update()?;
        loop {
            let event = if self.status == Status::Running {
                if event::poll(self.delay)? {
                    Some(event::read()?)
                } else {
                    None
                }
            } else {
                Some(event::read()?)
            };
            match event {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if self.key(key)? {
                        return Ok(());
                    }
                }
                Some(Event::Resize(width, height)) => {
                    self.size = (width, height);
                    self.update()?;
                }
                Some(_) => (),
                None => {
                    self.step();
                    self.update()?;
                }
            }
        }
    }
}

/// Runs the simulation in the TUI.
///
/// The terminal is restored before returning, even on errors.
/// Then the last generation is printed.
pub(crate) fn run_with_tui(args: Args) -> Result<(), Box<dyn Error>> {
    let mut window = LifeWindow::new(args)?;

    enable_raw_mode()?;
    execute!(window.stdout, EnterAlternateScreen, Hide)?;

    let result = window.run();

    if let Err(e) = execute!(window.stdout, Show, LeaveAlternateScreen) {
        error!("failed to leave alternate screen: {}", e);
    }
    if let Err(e) = disable_raw_mode() {
        error!("failed to disable raw mode: {}", e);
    }
    result?;

    print!("{}", window.renderer.render(window.simulation.current()));
    Ok(())
}
