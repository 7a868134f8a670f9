use std::env;
use std::process;

use fretmap::{scale_names, Config, FretRange, Render, TextDiagram};

const USAGE: &str = "Usage: fretmap [options] <root> <scale>
       fretmap --list-scales

Options:
  --config <file.yaml>     Read settings from a YAML file
  --tuning <E4,B3,...>     Open strings, string 1 first
  --frets <min-max>        Fret window, e.g. 0-12
  --format <text|json|yaml>
  --list-scales            Print the known scale names";

enum Format {
    Text,
    Json,
    Yaml,
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config_path: Option<String> = None;
    let mut tuning: Option<Vec<String>> = None;
    let mut frets: Option<FretRange> = None;
    let mut format = Format::Text;
    let mut words: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .unwrap_or_else(|| fail(&format!("{} needs a value\n\n{}", flag, USAGE)))
        };
        match arg.as_str() {
            "--config" => config_path = Some(value("--config")),
            "--tuning" => {
                tuning = Some(
                    value("--tuning")
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            }
            "--frets" => {
                frets = Some(
                    value("--frets")
                        .parse::<FretRange>()
                        .unwrap_or_else(|e| fail(&format!("Error: {}", e))),
                )
            }
            "--format" => {
                format = match value("--format").as_str() {
                    "text" => Format::Text,
                    "json" => Format::Json,
                    "yaml" => Format::Yaml,
                    other => fail(&format!("Unknown format '{}'\n\n{}", other, USAGE)),
                }
            }
            "--list-scales" => {
                for name in scale_names() {
                    println!("{}", name);
                }
                return;
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            flag if flag.starts_with("--") => {
                fail(&format!("Unknown option '{}'\n\n{}", flag, USAGE))
            }
            word => words.push(word.to_string()),
        }
    }

    let mut config = match &config_path {
        Some(path) => Config::load(path).unwrap_or_else(|e| fail(&format!("Error: {}", e))),
        None => Config::default(),
    };
    if !words.is_empty() {
        config.scale = Some(words.join(" "));
    }
    if let Some(tuning) = tuning {
        config.tuning = tuning;
    }
    if let Some(frets) = frets {
        config.frets = frets;
    }
    if config.scale.is_none() {
        fail(USAGE);
    }

    let view = config
        .compute()
        .unwrap_or_else(|e| fail(&format!("Error: {}", e)));

    let output = match format {
        Format::Text => format!(
            "{}\n\n{}",
            view.summary.caption(),
            TextDiagram::default().render(&view.placements, &view.tuning, view.range)
        ),
        Format::Json => serde_json::to_string_pretty(&view)
            .unwrap_or_else(|e| fail(&format!("Error writing JSON: {}", e))),
        Format::Yaml => serde_yaml::to_string(&view)
            .unwrap_or_else(|e| fail(&format!("Error writing YAML: {}", e))),
    };
    println!("{}", output);
}
