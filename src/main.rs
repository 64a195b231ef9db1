use clap::Parser;
use liverace_auth::app::App;
use liverace_auth::router::Route;
use liverace_auth::terminal::Terminal;
use liverace_auth::terminal_event::TerminalEvent;
use liverace_auth::ui::{Renderer, Theme};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "liverace-auth",
    about = "Terminal front end for the LiveRace sign-in screens"
)]
struct Cli {
    /// Initial route; unknown paths fall back to /login
    #[arg(long, default_value = "/login")]
    route: String,

    /// Print the initial frame as JSON and exit
    #[arg(long)]
    dump_frame: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let app = App::new(Route::resolve(&cli.route));
    let renderer = Renderer::new(Theme::default_theme());

    if cli.dump_frame {
        let frame = renderer.frame(&app);
        println!("{:#}", app.snapshot(&frame));
        return Ok(());
    }

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;

    let result = event_loop(app, &renderer, &mut terminal);

    let cleanup = terminal.finish();
    terminal.exit_raw_mode()?;
    result.and(cleanup)
}

fn event_loop(mut app: App, renderer: &Renderer, terminal: &mut Terminal) -> io::Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            terminal.draw(&renderer.frame(&app))?;
            render_requested = false;
        }

        if app.should_exit() {
            break;
        }

        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    app.handle_key(key_event);
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }
    }

    Ok(())
}
