//! Line-oriented game loop, ASCII board and environment configuration.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use romantic_pursuit::story::Story;
use romantic_pursuit::{
    Catalog, CellKind, Dimension, Direction, Engine, Event, GameMode, GRID_SIZE, Lang,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LANG_ENV_VAR: &str = "PURSUIT_LANG";
const LEVELS_ENV_VAR: &str = "PURSUIT_LEVELS";

struct CliConfig {
    lang: Lang,
    levels_path: Option<String>,
}

impl CliConfig {
    fn from_env() -> Self {
        Self {
            lang: std::env::var(LANG_ENV_VAR)
                .map(|tag| Lang::from_tag(&tag))
                .unwrap_or_default(),
            levels_path: std::env::var(LEVELS_ENV_VAR)
                .ok()
                .filter(|p| !p.trim().is_empty()),
        }
    }

    fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.levels_path {
            Some(path) => {
                let src = std::fs::read_to_string(path)
                    .with_context(|| format!("reading level file {path}"))?;
                let catalog = Catalog::from_json(&src)
                    .with_context(|| format!("loading level file {path}"))?;
                info!(path = %path, levels = catalog.len(), "custom levels loaded");
                Ok(catalog)
            }
            None => Catalog::builtin(self.lang).context("building built-in levels"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Step(Direction),
    Switch(Dimension),
    Next,
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => Some(Command::Step(Direction::Up)),
        "s" | "down" => Some(Command::Step(Direction::Down)),
        "a" | "left" => Some(Command::Step(Direction::Left)),
        "d" | "right" => Some(Command::Step(Direction::Right)),
        "1" => Some(Command::Switch(Dimension::Human)),
        "2" => Some(Command::Switch(Dimension::Heaven)),
        "3" => Some(Command::Switch(Dimension::Hell)),
        "" | "n" | "next" => Some(Command::Next),
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// What the input loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

fn apply(engine: &mut Engine, cmd: Command) -> Flow {
    match cmd {
        Command::Quit => return Flow::Stop,
        Command::Step(dir) => engine.step(dir),
        Command::Switch(dim) => engine.switch_dimension(dim),
        Command::Restart => engine.restart_level(),
        Command::Next => match engine.mode() {
            GameMode::Start => engine.begin(),
            GameMode::Dialog => engine.advance_dialog(),
            GameMode::GameOver => engine.restart_level(),
            GameMode::Victory => return Flow::Stop,
            GameMode::Playing => {}
        },
    }
    Flow::Continue
}

pub fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!(error = %err, "pursuit failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    let story = config.lang.story();
    let mut engine = Engine::new(config.load_catalog()?);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}\n\n{}\n\n{}", story.title, story.description, story.controls)?;
    writeln!(out, "[{}]", story.start_button)?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let Some(cmd) = parse_command(&line) else {
            writeln!(out, "? w/a/s/d move, 1/2/3 switch, enter next, r restart, q quit")?;
            continue;
        };
        if apply(&mut engine, cmd) == Flow::Stop {
            break;
        }
        for event in engine.drain_events() {
            report(&mut out, story, &engine, &event)?;
        }
        draw(&mut out, story, &engine)?;
        out.flush()?;
    }
    Ok(())
}

fn report(out: &mut impl Write, story: &Story, engine: &Engine, event: &Event) -> io::Result<()> {
    match event {
        Event::Blocked => writeln!(out, "(bump)"),
        Event::DimensionSwitched(dim) => writeln!(out, "-- you shift into {dim} --"),
        Event::Died(_) => writeln!(out, "{}\n{}", story.game_over_title, story.death_overlap),
        Event::LevelAdvanced(_) | Event::LevelStarted(_) => {
            writeln!(out, "== {} ==", engine.level().name.to_uppercase())
        }
        Event::Victory => writeln!(
            out,
            "{}\n\n{}",
            story.victory_title,
            story.victory_text.join("\n\n")
        ),
        Event::Moved(_) | Event::ItemCollected { .. } | Event::DialogAdvanced => Ok(()),
    }
}

fn draw(out: &mut impl Write, story: &Story, engine: &Engine) -> io::Result<()> {
    if engine.mode() == GameMode::Start {
        return Ok(());
    }
    let level = engine.level();
    let player = engine.player();
    writeln!(
        out,
        "{}{} [{}]",
        story.level_prefix,
        engine.level_index() + 1,
        player.dimension
    )?;
    let mut row = String::new();
    let map = level.map(player.dimension);
    for (cell, kind) in map.cells() {
        let glyph = if cell == player.cell {
            if engine.mode() == GameMode::GameOver { 'X' } else { '@' }
        } else if cell == level.end {
            '>'
        } else if cell == level.start {
            'o'
        } else if kind != CellKind::Wall
            && level.trigger(cell).is_some()
            && !engine.is_collected(cell)
        {
            '*'
        } else if kind == CellKind::Wall {
            '#'
        } else {
            '.'
        };
        row.push(glyph);
        if cell.x == GRID_SIZE - 1 {
            writeln!(out, "{row}")?;
            row.clear();
        }
    }
    if let Some(dialog) = engine.dialog() {
        writeln!(out, "\n{}\n{}", dialog.text, story.next_hint)?;
    }
    Ok(())
}
