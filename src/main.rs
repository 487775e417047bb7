use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{LevelFilter, error, info};
use ratatui::prelude::*;

use modlist::storage::{DEFAULT_CONFIG_PATH, MODS_KEY, load_config, load_settings};
use modlist::ui::{self, App, Theme, render};
use modlist::{ModlistError, Result};

#[derive(Parser, Debug)]
#[command(name = "modlist")]
#[command(about = "Browse and reorder the mod list of a server config")]
struct Args {
    /// Server config file with `Key=value1;value2` lines
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Key holding the mod list
    #[arg(short, long, default_value = MODS_KEY)]
    key: String,

    /// Settings file (defaults to ~/.config/modlist/settings.toml)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    debug: bool,

    /// Log file (defaults to ~/.cache/modlist/modlist.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 日志目录路径 (~/.cache/modlist/)
fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or(ModlistError::MissingDir("cache"))?
        .join("modlist");
    Ok(dir.join("modlist.log"))
}

/// 终端被 UI 占用，日志写入文件
fn init_logging(args: &Args) -> Result<()> {
    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(&path)?;

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn load_app(args: &Args) -> Result<(App, Theme)> {
    let settings = load_settings(args.settings.as_deref())?;
    let config = load_config(&args.config)?;
    let mods = config.list(&args.key);
    info!(
        "loaded {} entries under {:?} from {}",
        mods.len(),
        args.key,
        args.config.display()
    );

    let theme = Theme::from_settings(&settings.theme);
    Ok((App::from_settings(mods, &settings), theme))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("modlist: cannot set up logging: {e}");
        return ExitCode::FAILURE;
    }

    // 配置文件无法读取时直接退出，不进入界面
    let (mut app, theme) = match load_app(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{e}");
            eprintln!("modlist: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut app, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("terminal loop failed: {e}");
            eprintln!("modlist: {e}");
            ExitCode::FAILURE
        }
    }
}

/// 出错时先执行清理再返回错误
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn run(app: &mut App, theme: &Theme) -> Result<()> {
    // 设置终端，失败时不能留在 raw mode
    enable_raw_mode()?;
    let mut terminal = restore_on_err(setup_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    // 主循环
    let result = run_app(&mut terminal, app, theme);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if result.is_ok() && app.should_quit() {
        println!("{}", theme.farewell);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app, theme))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    // 告别帧
    terminal.draw(|f| render(f, app, theme))?;
    info!("exiting with {} mods in the list", app.mods.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_restore_runs_on_setup_failure() {
        let restored = Cell::new(false);
        let result: io::Result<()> =
            restore_on_err(Err(io::Error::other("no tty")), || restored.set(true));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_restore_skipped_on_success() {
        let restored = Cell::new(false);
        let result = restore_on_err(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
