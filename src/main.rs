//! Terminal Yatzy runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! redraws a handful of plain text lines per event; the round engine itself
//! never touches the terminal.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, terminal, QueueableCommand};

use tui_yatzy::core::{DiceSource, FinishedRound, RoundEngine, RoundSnapshot};
use tui_yatzy::store::{JsonFileStore, ScoreStore};
use tui_yatzy::types::{Category, RoundPhase, ScoreRecord, NUM_DICE, STATUS_CLEAR_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct GameConfig {
    player: String,
    data_dir: PathBuf,
    seed: u32,
}

fn parse_args(args: &[String]) -> Result<GameConfig> {
    let mut player = String::from("Player");
    let mut data_dir: Option<PathBuf> = None;
    let mut seed: u32 = seed_from_clock();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--player" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --player"))?;
                player = v.clone();
            }
            "--dir" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --dir"))?;
                data_dir = Some(PathBuf::from(v));
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (usage: tui-yatzy [--player NAME] [--dir PATH] [--seed N])",
                    other
                ));
            }
        }
        i += 1;
    }

    let data_dir = data_dir
        .or_else(|| std::env::var_os("YATZY_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| std::env::temp_dir().join("tui-yatzy"));

    Ok(GameConfig {
        player,
        data_dir,
        seed,
    })
}

fn seed_from_clock() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos().wrapping_add(elapsed.as_secs() as u32),
        Err(_) => 1,
    }
}

/// Raw-mode guard around the alternate screen.
struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn draw_lines(&mut self, lines: &[String]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            self.stdout.queue(Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let store = JsonFileStore::new(&config.data_dir);
    let mut engine = RoundEngine::new(
        config.player.clone(),
        DiceSource::seeded(config.seed),
        store,
    );

    let mut term = Terminal::new();
    term.enter()?;

    let mut warnings: Vec<String> = Vec::new();
    let result = run(&mut term, &mut engine, &mut warnings);

    // Always try to restore terminal state.
    let _ = term.exit();
    for warning in &warnings {
        eprintln!("{warning}");
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Game,
    Scoreboard,
}

fn run(
    term: &mut Terminal,
    engine: &mut RoundEngine<JsonFileStore>,
    warnings: &mut Vec<String>,
) -> Result<()> {
    let mut view = View::Game;
    let mut last_finish: Option<FinishedRound> = None;

    // Every status message schedules its own clear; a newer message simply
    // replaces the pending one, so stale clears never fire.
    let mut pending_clear: Option<(u64, Instant)> = None;
    let mut seen_token = 0u64;
    let status_interval = Duration::from_millis(STATUS_CLEAR_MS);

    loop {
        let token = engine.status_token();
        if token != seen_token {
            seen_token = token;
            pending_clear = Some((token, Instant::now()));
        }
        if let Some((clear_token, since)) = pending_clear {
            if since.elapsed() >= status_interval {
                engine.clear_status(clear_token);
                pending_clear = None;
            }
        }

        let lines = match view {
            View::Game => render_game(engine, last_finish.as_ref()),
            View::Scoreboard => render_scoreboard(engine.store(), warnings),
        };
        term.draw_lines(&lines)?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }

        if view == View::Scoreboard {
            // Any key returns to the table.
            view = View::Game;
            continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
            KeyCode::Char(' ') | KeyCode::Char('t') => {
                let _ = engine.throw_dice();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let die = c as usize - '1' as usize;
                let _ = engine.toggle_hold(die);
            }
            KeyCode::Char(c @ 'a'..='f') => {
                let index = c as usize - 'a' as usize;
                if let Some(category) = Category::from_index(index) {
                    if engine.commit_category(category).is_ok() {
                        if let Some(finished) = engine.take_finished() {
                            if let Some(err) = &finished.persist_error {
                                warnings.push(format!("[store] append failed: {err}"));
                            }
                            last_finish = Some(finished);
                        }
                    }
                }
            }
            KeyCode::Char('r') => {
                let player = engine.player_name().to_string();
                engine.reset_round(player);
                last_finish = None;
            }
            KeyCode::Char('s') => {
                view = View::Scoreboard;
            }
            _ => {}
        }
    }
}

fn render_game(engine: &RoundEngine<JsonFileStore>, last_finish: Option<&FinishedRound>) -> Vec<String> {
    let snap: RoundSnapshot = engine.snapshot();
    let mut lines = Vec::new();

    lines.push(format!("Yatzy - {}", engine.player_name()));
    lines.push(String::new());
    lines.push(format!("Dice:   {}", dice_row(&snap)));
    lines.push(format!(
        "Throws: {} left this turn ({})",
        snap.throws_left,
        snap.phase.as_str()
    ));
    lines.push(String::new());
    lines.push(format!("Points: {}", category_row(&snap)));
    lines.push(total_row(&snap));
    lines.push(String::new());
    lines.push(match engine.status_message() {
        Some(text) => format!("> {text}"),
        None => String::new(),
    });
    if let Some(finished) = last_finish {
        let saved = if finished.persisted() {
            "saved to the scoreboard"
        } else {
            "NOT saved"
        };
        lines.push(format!(
            "Final score {} for {} ({saved})",
            finished.record.score, finished.record.name
        ));
    }
    lines.push(String::new());
    lines.push(String::from(
        "[space] throw  [1-5] hold  [a-f] set points  [s] scoreboard  [r] new round  [q] quit",
    ));
    lines
}

fn dice_row(snap: &RoundSnapshot) -> String {
    let mut out = String::new();
    for die in 0..NUM_DICE {
        let spot = snap.spots[die];
        let cell = if spot == 0 {
            String::from("[.]")
        } else if snap.held[die] {
            format!("({spot})")
        } else {
            format!("[{spot}]")
        };
        out.push_str(&cell);
        out.push(' ');
    }
    out.push_str("    (parentheses = held)");
    out
}

fn category_row(snap: &RoundSnapshot) -> String {
    let mut parts = Vec::new();
    for cat in Category::ALL {
        let i = cat.index();
        if snap.locked[i] {
            parts.push(format!("{}:{}", cat.as_str(), snap.scores[i]));
        } else {
            parts.push(format!("{}:[{}]", cat.as_str(), key_for(cat)));
        }
    }
    parts.join("  ")
}

fn key_for(cat: Category) -> char {
    (b'a' + cat.index() as u8) as char
}

fn total_row(snap: &RoundSnapshot) -> String {
    if snap.phase == RoundPhase::Complete {
        format!("Total:  {} (bonus {})", snap.total, snap.bonus)
    } else if snap.bonus > 0 {
        format!("Total:  {} (bonus earned)", snap.total)
    } else {
        format!(
            "Total:  {} ({} points to the bonus)",
            snap.total, snap.points_to_bonus
        )
    }
}

fn render_scoreboard(store: &JsonFileStore, warnings: &mut Vec<String>) -> Vec<String> {
    // Read failures degrade to an empty board; the warning surfaces after
    // the terminal is restored.
    let records: Vec<ScoreRecord> = match store.read_all() {
        Ok(records) => records,
        Err(err) => {
            let warning = format!("[store] read failed: {err}");
            if !warnings.contains(&warning) {
                warnings.push(warning);
            }
            Vec::new()
        }
    };

    let mut lines = Vec::new();
    lines.push(String::from("Scoreboard"));
    lines.push(String::new());
    if records.is_empty() {
        lines.push(String::from("No scores yet."));
    } else {
        for (i, record) in records.iter().enumerate() {
            lines.push(format!("{:>3}. {:<20} {}", i + 1, record.name, record.score));
        }
    }
    lines.push(String::new());
    lines.push(String::from("Press any key to return."));
    lines
}
