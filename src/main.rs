// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! glprimer runs one demo against in-memory surfaces and prints every
//! device call it made, one per line.
//!
//! ```text
//! glprimer colored_points --click 300,100 --click 100,300
//! glprimer translated_triangle --mode TRIANGLES --mode LINE_LOOP
//! glprimer pulse --frames 30 --log-level debug
//! ```

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, warn, LevelFilter};
use pixel_glprimer::demos::{
    DemoKind, DrawRectangle, HelloCanvas, HelloPoint1, HelloPoint2, PointDemo, Pulse,
    TranslatedTriangle,
};
use pixel_glprimer::input::PressEvent;
use pixel_glprimer::log::init_log;
use pixel_glprimer::scheduler::ManualScheduler;
use pixel_glprimer::surface::HeadlessHost;
use pixel_glprimer::{GlResult, PrimerConfig};

fn parse_click(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("x: {}", e))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("y: {}", e))?;
    Ok((x, y))
}

fn make_parser() -> Command {
    let demos: Vec<&'static str> = DemoKind::ALL.iter().map(|d| d.name()).collect();
    Command::new("glprimer")
        .author("zipxing@hotmail.com")
        .about("Runs a WebGL primer demo headlessly and prints its device calls")
        .arg(
            Arg::new("demo")
                .required(true)
                .value_parser(clap::builder::PossibleValuesParser::new(demos)),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("click")
                .long("click")
                .value_name("X,Y")
                .help("pointer press in surface pixels (point demos)")
                .action(ArgAction::Append)
                .value_parser(parse_click),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .help("topology selected after setup (translated_triangle)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .default_value("1")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(Arg::new("config").long("config").value_name("FILE"))
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .default_value("warn")
                .value_parser(clap::value_parser!(LevelFilter)),
        )
        .arg(Arg::new("log_file").long("log-file").value_name("FILE"))
}

struct RunOptions {
    width: Option<u32>,
    height: Option<u32>,
    clicks: Vec<(f64, f64)>,
    modes: Vec<String>,
    frames: u64,
}

impl RunOptions {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            width: m.get_one::<u32>("width").copied(),
            height: m.get_one::<u32>("height").copied(),
            clicks: m
                .get_many::<(f64, f64)>("click")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
            modes: m
                .get_many::<String>("mode")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            frames: m.get_one::<u64>("frames").copied().unwrap_or(1),
        }
    }
}

fn make_host(kind: DemoKind, cfg: &PrimerConfig, opts: &RunOptions) -> (HeadlessHost, String) {
    let id = cfg.surface_id(kind.default_surface_id()).to_string();
    let width = opts.width.unwrap_or(cfg.headless.width);
    let height = opts.height.unwrap_or(cfg.headless.height);
    (HeadlessHost::new().with_surface(&id, width, height), id)
}

fn run_demo(kind: DemoKind, host: &HeadlessHost, cfg: &PrimerConfig, opts: &RunOptions) -> GlResult<()> {
    if !opts.clicks.is_empty() && !kind.accepts_clicks() {
        warn!("{} ignores --click", kind);
    }
    if !opts.modes.is_empty() && kind != DemoKind::TranslatedTriangle {
        warn!("{} ignores --mode", kind);
    }
    let presses = opts.clicks.iter().map(|&(x, y)| PressEvent::at(x, y));
    match kind {
        DemoKind::HelloCanvas => {
            HelloCanvas::run(host, cfg)?;
        }
        DemoKind::HelloPoint1 => {
            HelloPoint1::run(host, cfg)?;
        }
        DemoKind::HelloPoint2 => {
            HelloPoint2::run(host, cfg)?;
        }
        DemoKind::DrawRectangle => {
            DrawRectangle::run(host, cfg)?;
        }
        DemoKind::ClickedPoints | DemoKind::ColoredPoints => {
            let mut demo = if kind == DemoKind::ClickedPoints {
                PointDemo::clicked(host, cfg)?
            } else {
                PointDemo::colored(host, cfg)?
            };
            for ev in presses {
                demo.on_press(&ev);
            }
        }
        DemoKind::TranslatedTriangle => {
            let mut demo = TranslatedTriangle::run(host, cfg)?;
            for mode in &opts.modes {
                demo.select_mode(mode);
            }
        }
        DemoKind::Pulse => {
            let mut demo = Pulse::setup(host, cfg)?;
            ManualScheduler::new().run(&mut demo, opts.frames)?;
        }
    }
    Ok(())
}

/// Recorded calls of the surface, whichever context kind it handed out
fn trace(host: &HeadlessHost, id: &str) -> Vec<String> {
    if let Some(gl) = host.device(id) {
        return gl.calls().iter().map(|c| c.to_string()).collect();
    }
    if let Some(canvas) = host.canvas(id) {
        return canvas
            .fills()
            .iter()
            .flat_map(|f| {
                let [x, y, w, h] = f.rect;
                vec![
                    format!("fillStyle = {}", f.style),
                    format!("fillRect({}, {}, {}, {})", x, y, w, h),
                ]
            })
            .collect();
    }
    vec![]
}

fn main() {
    let matches = make_parser().get_matches();
    let level = matches
        .get_one::<LevelFilter>("log_level")
        .copied()
        .unwrap_or(LevelFilter::Warn);
    let log_file = matches.get_one::<String>("log_file").map(|s| s.as_str());
    if let Err(e) = init_log(level, log_file) {
        eprintln!("glprimer: logger not installed: {}", e);
    }

    let cfg = match matches.get_one::<String>("config") {
        Some(path) => match PrimerConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("{}", e);
                eprintln!("glprimer: {}", e);
                std::process::exit(1);
            }
        },
        None => PrimerConfig::default(),
    };
    let kind = match matches
        .get_one::<String>("demo")
        .map(|s| s.parse::<DemoKind>())
    {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            eprintln!("glprimer: {}", e);
            std::process::exit(2);
        }
        None => {
            eprintln!("glprimer: no demo given");
            std::process::exit(2);
        }
    };
    let opts = RunOptions::from_matches(&matches);

    let (host, id) = make_host(kind, &cfg, &opts);
    let result = run_demo(kind, &host, &cfg, &opts);
    for line in trace(&host, &id) {
        println!("{}", line);
    }
    if let Err(e) = result {
        error!("{} failed: {}", kind, e);
        eprintln!("glprimer: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(args: &[&str]) -> (DemoKind, RunOptions) {
        let mut argv = vec!["glprimer"];
        argv.extend_from_slice(args);
        let m = make_parser().try_get_matches_from(argv).unwrap();
        let kind = m.get_one::<String>("demo").unwrap().parse().unwrap();
        (kind, RunOptions::from_matches(&m))
    }

    #[test]
    fn clicks_and_modes_accumulate() {
        let (kind, o) = opts(&[
            "colored_points",
            "--click",
            "300,100",
            "--click",
            "100, 300",
            "--width",
            "640",
        ]);
        assert_eq!(kind, DemoKind::ColoredPoints);
        assert_eq!(o.clicks, vec![(300.0, 100.0), (100.0, 300.0)]);
        assert_eq!(o.width, Some(640));
        assert_eq!(o.frames, 1);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(make_parser()
            .try_get_matches_from(["glprimer", "teapot"])
            .is_err());
        assert!(make_parser()
            .try_get_matches_from(["glprimer", "pulse", "--click", "12"])
            .is_err());
    }

    #[test]
    fn clicked_points_trace_ends_with_point_draws() {
        let cfg = PrimerConfig::default();
        let (kind, o) = opts(&["clicked_points", "--click", "200,200", "--click", "0,0"]);
        let (host, id) = make_host(kind, &cfg, &o);
        run_demo(kind, &host, &cfg, &o).unwrap();
        let lines = trace(&host, &id);
        assert_eq!(lines.last().map(|s| s.as_str()), Some("drawArrays(POINTS, 0, 1)"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("drawArrays")).count(), 3);
    }

    #[test]
    fn rectangle_trace_comes_from_the_2d_canvas() {
        let cfg = PrimerConfig::default();
        let (kind, o) = opts(&["draw_rectangle"]);
        let (host, id) = make_host(kind, &cfg, &o);
        run_demo(kind, &host, &cfg, &o).unwrap();
        assert_eq!(
            trace(&host, &id),
            vec!["fillStyle = rgba(0, 0, 255, 1.0)", "fillRect(120, 10, 150, 150)"]
        );
    }

    #[test]
    fn pulse_runs_the_requested_frames() {
        let cfg = PrimerConfig::default();
        let (kind, o) = opts(&["pulse", "--frames", "4"]);
        let (host, id) = make_host(kind, &cfg, &o);
        run_demo(kind, &host, &cfg, &o).unwrap();
        assert_eq!(host.device(&id).unwrap().draws().len(), 4);
    }
}
