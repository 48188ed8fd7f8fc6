// canvas-demo - draws a small scene with shell-canvas
//
// Modes:
// - default: animate a banner sliding across the canvas for --frames frames
// - --interactive: Tab/Shift+Tab between buttons, Enter presses, Ctrl+Q quits
// - --print-config: write the effective configuration as TOML and exit

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use shell_canvas::{
    shared, BorderStyle, Button, Canvas, CanvasConfig, Component, CrosstermKeyReader, Gui, Label,
    Position, TerminalSink, ZIndex,
};

#[derive(Parser, Debug)]
#[command(name = "canvas-demo")]
#[command(version)]
#[command(about = "Draw an ASCII canvas scene in the terminal", long_about = None)]
struct Cli {
    /// TOML file with canvas settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of animation frames
    #[arg(short, long, default_value_t = 20)]
    frames: u32,

    /// Run the keyboard-driven form instead of the animation
    #[arg(short, long)]
    interactive: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Frames go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match &cli.config {
        Some(path) => CanvasConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CanvasConfig {
            width: 40,
            height: 8,
            ..CanvasConfig::default()
        },
    };
    tracing::debug!(?config, "configuration loaded");

    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    if cli.interactive {
        run_form(&config)
    } else {
        run_animation(&config, cli.frames)
    }
}

fn run_animation(config: &CanvasConfig, frames: u32) -> anyhow::Result<()> {
    let mut canvas = config.build_canvas()?;
    let mut options = config.draw_options()?;
    if options.delay.is_zero() {
        options.delay = std::time::Duration::from_millis(80);
    }

    let banner = Rc::new(RefCell::new(
        Label::new((0, 1), "shell-canvas").with_border(BorderStyle::THIN),
    ));
    let counter = Rc::new(RefCell::new(Label::new((1, 0), "")));
    canvas.add(shared(Label::new((0, 4), "z-order demo").with_max_length(10)), ZIndex::Append)?;
    canvas.add(banner.clone(), ZIndex::Append)?;
    canvas.add(counter.clone(), ZIndex::Append)?;

    let mut sink = TerminalSink::stdout();
    let travel = i32::from(canvas.width()).max(1);
    for frame in 0..frames {
        let x = (frame as i32 % travel) - 4;
        banner.borrow_mut().set_position(Position::new(x, 1));
        counter.borrow_mut().set_text(format!("frame {}/{frames}", frame + 1));

        canvas
            .draw(&mut sink, &options)
            .with_context(|| format!("failed to draw frame {frame}"))?;
    }
    Ok(())
}

fn run_form(config: &CanvasConfig) -> anyhow::Result<()> {
    let mut canvas: Canvas = config.build_canvas()?;

    let status = Rc::new(RefCell::new(Label::new(
        (1, 5),
        "Tab to move, Enter to press, Ctrl+Q to quit",
    )));
    canvas.add(shared(Label::new((1, 0), "shell-canvas form")), ZIndex::Append)?;
    canvas.add(status.clone(), ZIndex::Append)?;

    for (i, text) in ["Save", "Load", "Reset"].into_iter().enumerate() {
        let mut button = Button::new((1 + 8 * i as i32, 2), text);
        let status = status.clone();
        button.on_press.on(move |sender, _| {
            status.borrow_mut().set_text(format!("{text} pressed ({sender})"));
        });
        canvas.add(shared(button), ZIndex::Append)?;
    }

    let mut gui = Gui::new(canvas, CrosstermKeyReader::new(), TerminalSink::stdout())
        .with_options(config.draw_options()?);
    gui.run().context("form loop failed")?;
    Ok(())
}
