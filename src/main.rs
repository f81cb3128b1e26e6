use anyhow::{bail, Context};
use linepad::{logging, App, EditorConfig};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let config = match &options.config {
        Some(path) => EditorConfig::load_from(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?
            .with_env_overrides(),
        None => EditorConfig::load().context("failed to read configuration")?,
    };
    logging::init(&config);

    println!("linepad - line addressed text editor");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new(config);
    if let Some(file) = &options.file {
        if let Err(error) = app.processor_mut().open(file) {
            eprintln!("Error: {}", error);
        }
    }

    let stdin = std::io::stdin();
    app.run(stdin.lock(), std::io::stdout())
        .context("command loop failed")?;

    Ok(())
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    file: Option<String>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let mut options = Options::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => match iter.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => bail!("--config requires a path"),
            },
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            file => options.file = Some(file.to_string()),
        }
    }

    Ok(options)
}
