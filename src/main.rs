//! Interactive terminal entrypoint.
//!
//! Owns the scheduler: the 60Hz physics frame, the pipe spawner, the wing
//! animation, and particle decay all run as periodic actions serialized onto
//! this one thread, so no two of them ever see a half-updated session.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use skyward::audio::{AudioOutput, SoundId};
use skyward::constants::{
    BIRD_ANIM_INTERVAL_MS, FRAME_INTERVAL_MS, PARTICLE_INTERVAL_MS, PIPE_SPAWN_INTERVAL_MS,
};
use skyward::game::logic::{process_frame, process_input, GameEvent, GameInput};
use skyward::game::particles::update_particles;
use skyward::game::types::GameSession;
use skyward::ui::scene::render_session;

struct Options {
    seed: Option<u64>,
    mute: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        seed: None,
        mute: false,
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Flappy Bird\n");
                println!("Usage: skyward [options]\n");
                println!("Options:");
                println!("  --seed N   Fix the random seed (reproducible pipe layout)");
                println!("  --mute     Disable sound");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            "--mute" => options.mute = true,
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {}", value))?,
                );
            }
            other => return Err(format!("unknown option: {}", other)),
        }
    }
    Ok(options)
}

fn main() -> io::Result<()> {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'skyward --help' for usage.");
            std::process::exit(1);
        }
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // A missing audio device is non-fatal: the game runs silent.
    let audio = if options.mute {
        None
    } else {
        AudioOutput::new()
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut rng, audio.as_ref());

    // Always restore the terminal, even when the loop errored.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    rng: &mut StdRng,
    audio: Option<&AudioOutput>,
) -> io::Result<()> {
    let mut session = GameSession::new();

    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let spawn_interval = Duration::from_millis(PIPE_SPAWN_INTERVAL_MS);
    let anim_interval = Duration::from_millis(BIRD_ANIM_INTERVAL_MS);
    let particle_interval = Duration::from_millis(PARTICLE_INTERVAL_MS);

    let mut last_frame = Instant::now();
    let mut last_spawn = Instant::now();
    let mut last_anim = Instant::now();
    let mut last_particle = Instant::now();

    loop {
        terminal.draw(|frame| {
            render_session(frame, frame.size(), &session);
        })?;

        // Block on input at most until the next frame is due.
        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if is_quit(key) {
                        return Ok(());
                    }
                    if let Some(input) = map_key(key.code) {
                        if let Some(game_event) = process_input(&mut session, input) {
                            play(audio, game_event);
                        }
                    }
                }
            }
        }

        // The four cadences run back to back; each mutation of the session
        // completes before the next begins.
        if last_frame.elapsed() >= frame_interval {
            last_frame = Instant::now();
            for game_event in process_frame(&mut session, rng) {
                play(audio, game_event);
            }
        }
        if last_spawn.elapsed() >= spawn_interval {
            last_spawn = Instant::now();
            session.spawn_pipe(rng);
        }
        if last_anim.elapsed() >= anim_interval {
            last_anim = Instant::now();
            session.advance_bird_frame();
        }
        if last_particle.elapsed() >= particle_interval {
            last_particle = Instant::now();
            update_particles(&mut session);
        }
    }
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    )
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Char(' ') | KeyCode::Up => Some(GameInput::Flap),
        _ => None,
    }
}

fn play(audio: Option<&AudioOutput>, game_event: GameEvent) {
    if let Some(audio) = audio {
        audio.play(match game_event {
            GameEvent::Flap => SoundId::Jump,
            GameEvent::Score => SoundId::Score,
            GameEvent::Crash => SoundId::Hit,
        });
    }
}
