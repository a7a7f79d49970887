//! Obstacle Course headless driver
//!
//! Runs the simulation at full speed with a simple auto-jump bot standing in
//! for the keyboard, routes events to a logging audio sink, and prints the
//! final frame snapshot as JSON.
//!
//! Usage: `obstacle-course [ticks] [seed] [easy|normal|hard]`

fn main() {
    env_logger::init();
    if let Err(err) = driver::run(std::env::args().skip(1).collect()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

mod driver {
    use obstacle_course::audio::{AudioDirector, LogSink};
    use obstacle_course::consts::TICKS_PER_SECOND;
    use obstacle_course::input::{InputHandler, Key};
    use obstacle_course::sim::{GameEvent, GamePhase, Session};
    use obstacle_course::{Difficulty, Settings};

    /// Restarts before the bot gives up
    const MAX_RUNS: u32 = 3;
    /// How many ticks of travel ahead the bot looks for obstacles
    const LOOKAHEAD_TICKS: f32 = 9.0;

    pub fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
        let ticks: u64 = args.first().and_then(|a| a.parse().ok()).unwrap_or(3600);
        let seed: u64 = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(42);
        let difficulty = args
            .get(2)
            .and_then(|a| Difficulty::from_str(a))
            .unwrap_or_default();

        let settings = Settings {
            difficulty,
            ..Default::default()
        };
        let mut session = Session::new(settings.tuning(), seed)?;
        let mut input = InputHandler::new();
        let mut audio = AudioDirector::new(LogSink, &settings);
        audio.start_music();

        log::info!(
            "Obstacle Course (headless) - {} ticks ({:.1}s), seed {}, {}",
            ticks,
            ticks as f32 / TICKS_PER_SECOND as f32,
            seed,
            difficulty.as_str()
        );

        let mut deaths = 0;
        for _ in 0..ticks {
            drive_bot(&session, &mut input, deaths);

            let frame = input.take_frame();
            if frame.toggle_sound {
                audio.toggle_sound();
            }
            if frame.toggle_music {
                audio.toggle_music();
            }

            let outcome = session.tick(&frame.tick);
            audio.handle(&outcome.events);
            if outcome.quit {
                break;
            }
            if outcome
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Death { .. }))
            {
                deaths += 1;
            }
        }

        for (i, entry) in session.high_scores().entries.iter().enumerate() {
            log::info!(
                "#{}: run {} - score {} + bonus {} = {}",
                i + 1,
                entry.run,
                entry.score,
                entry.bonus,
                entry.total()
            );
        }

        let snapshot = session.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }

    /// Press keys the way a cautious player would
    fn drive_bot(session: &Session, input: &mut InputHandler, deaths: u32) {
        let phase = session.phase();
        match phase {
            GamePhase::Menu => input.key_down(Key::Enter, phase),
            GamePhase::GameOver if deaths < MAX_RUNS => input.key_down(Key::R, phase),
            GamePhase::GameOver => input.key_down(Key::Q, phase),
            GamePhase::Playing => {
                let player = session.player();
                let reach = player.x + player.width + session.speed() * LOOKAHEAD_TICKS;
                let threat = session
                    .world()
                    .obstacles
                    .obstacles()
                    .iter()
                    .any(|o| o.x + o.width > player.x && o.x < reach);
                if threat && player.on_ground() {
                    input.key_down(Key::Space, phase);
                } else {
                    input.key_up(Key::Space);
                }
            }
            _ => {}
        }
    }
}
