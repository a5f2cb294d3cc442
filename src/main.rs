//! trafficking-map — interactive session over the map state.
//!
//! Reads one command per line from stdin, feeds it to the app as an
//! input event and re-renders `map.svg` and `index.html` into the output
//! directory (`TRAFFICKING_MAP_OUT`, default current directory) after
//! every change. Type `help` for the command list.

use std::{
    env, fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use tracing_subscriber::EnvFilter;
use trafficking_map::{
    app::Event,
    layout::InputMode,
    routes::RouteType,
    search::SearchKey,
    viewport::PanDirection,
    App, Config, LonLat,
};

const HELP: &str = "\
commands:
  click <ID>               toggle selection of a country
  tap <x> <y>              click at canvas coordinates
  hover <x> <y>            move the pointer over the canvas
  search <text>            type into the search box
  pick <n>                 choose search result n (0-based)
  key down|up|enter|escape keyboard input
  zoom in|out              zoom buttons
  pan up|down|left|right   pan buttons
  reset                    restore the default view
  gesture <lon> <lat> <z>  report the end of a drag/wheel gesture
  toggle land|maritime|air show or hide a route type
  legend                   expand/collapse the legend (mobile)
  docs | close-docs        open/close the background guide
  close                    close the detail panel
  outside                  click outside the open sheet or modal
  resize <w> <h>           change the viewport size
  touch on|off             switch between touch and pointer input
  retry                    reload the map geometry after a failure
  show                     print the current state as JSON
  quit";

enum Command {
    Event(Event),
    Show,
    Help,
    Quit,
}

fn parse(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Err("empty command".into());
    };
    let rest: Vec<&str> = words.collect();
    let num = |i: usize| -> Result<f64, String> {
        rest.get(i)
            .ok_or_else(|| format!("{cmd}: missing argument {}", i + 1))?
            .parse::<f64>()
            .map_err(|e| format!("{cmd}: {e}"))
    };
    let arg = |i: usize| -> Result<&str, String> {
        rest.get(i).copied().ok_or_else(|| format!("{cmd}: missing argument {}", i + 1))
    };

    let event = match cmd {
        "click" => Event::Click(arg(0)?.to_ascii_uppercase()),
        "tap" => Event::ClickAt { x: num(0)?, y: num(1)? },
        "hover" => Event::Hover { x: num(0)?, y: num(1)? },
        "search" => Event::SearchInput(rest.join(" ")),
        "pick" => Event::SearchPick(num(0)? as usize),
        "key" => Event::Key(SearchKey::parse(arg(0)?).ok_or("key: expected down|up|enter|escape")?),
        "zoom" => match arg(0)? {
            "in" => Event::ZoomIn,
            "out" => Event::ZoomOut,
            other => return Err(format!("zoom: unknown direction {other}")),
        },
        "pan" => Event::Pan(PanDirection::parse(arg(0)?).ok_or("pan: expected up|down|left|right")?),
        "reset" => Event::Reset,
        "gesture" => Event::Gesture {
            center: LonLat::new(num(0)?, num(1)?),
            zoom: num(2)?,
        },
        "toggle" => Event::ToggleRoute(RouteType::parse(arg(0)?).ok_or("toggle: expected land|maritime|air")?),
        "legend" => Event::ToggleLegend,
        "docs" => Event::OpenDocs,
        "close-docs" => Event::CloseDocs,
        "close" => Event::ClosePanel,
        "outside" => Event::OutsideClick,
        "resize" => Event::Resize {
            width: num(0)? as u32,
            height: num(1)? as u32,
        },
        "touch" => Event::SetInput(match arg(0)? {
            "on" => InputMode::Touch,
            _ => InputMode::Pointer,
        }),
        "retry" => Event::RetryMap,
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Command::Event(event))
}

fn write_outputs(app: &mut App, out_dir: &Path) -> anyhow::Result<()> {
    fs::write(out_dir.join("map.svg"), app.render_map())?;
    fs::write(out_dir.join("index.html"), app.render_page())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "trafficking_map=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let out_dir = env::var("TRAFFICKING_MAP_OUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    fs::create_dir_all(&out_dir)?;

    let config = Config::default();
    let mut app = App::from_config(&config);

    // Placeholder first; the geometry load can take a while.
    write_outputs(&mut app, &out_dir)?;
    app.load_map();
    write_outputs(&mut app, &out_dir)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse(&line) {
                Ok(Command::Event(event)) => {
                    app.handle(event);
                    write_outputs(&mut app, &out_dir)?;
                    let panel = app.render_panel_text();
                    if !panel.is_empty() {
                        write!(stdout, "{panel}")?;
                    }
                    if let Some(t) = app.tooltip() {
                        writeln!(stdout, "[tooltip] {}", t.name)?;
                    }
                    if app.search().shows_no_results() {
                        writeln!(stdout, "[search] no results")?;
                    } else if app.search().is_open() {
                        writeln!(stdout, "[search] {}", app.search().results().join(", "))?;
                    }
                }
                Ok(Command::Show) => {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&app.snapshot())?)?;
                }
                Ok(Command::Help) => writeln!(stdout, "{HELP}")?,
                Ok(Command::Quit) => break,
                Err(e) => writeln!(stdout, "error: {e}")?,
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
