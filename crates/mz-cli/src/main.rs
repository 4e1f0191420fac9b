//! CLI de la plataforma analítica contra el backend en memoria.
//!
//! Subcomandos: `projects`, `stats`, `monitor`, `pipeline`, `download`.
//! Códigos de salida: 0 éxito, 1 resultado fallido, 2 uso inválido,
//! 5 error de plataforma.
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use mz_adapters::{download_execution_package, export_statistics_csv, print_error, print_info, print_monitor_summary,
                  print_pipeline_summary, print_projects, print_statistics, print_success, save_package, AdapterError,
                  ConsoleSink, Credentials, InMemoryPlatform};
use mz_core::{EtlPipeline, ExecutionMonitor, PipelineConfig, PollSettings, ProjectClient, SystemClock,
              TenantStatistics};
use mz_domain::require_guid;

const USAGE: &str = "\
Usage: mz-cli <command> [options]

Commands:
  projects [--detailed]
  stats [--detailed] [--export <FILE>]
  monitor --project <GUID> --execution <ID> [--interval <SECS>] [--max-minutes <MIN>]
  pipeline [--project <GUID>] [--config <FILE>] [--source <PATH>]...
  download --project <GUID> --execution <ID> [--dir <DIR>]

Credentials are read from MINDZIE_TENANT_ID, MINDZIE_API_KEY and
MINDZIE_API_URL (or a .env file in the current directory).";

fn usage_exit() -> ! {
    eprintln!("{USAGE}");
    std::process::exit(2);
}

fn load_credentials() -> Credentials {
    match Credentials::from_env() {
        Ok(creds) => creds,
        Err(err) => {
            print_error(&format!("{err}"));
            print_info("create a .env file with MINDZIE_TENANT_ID and MINDZIE_API_KEY, or export them");
            std::process::exit(2);
        }
    }
}

fn require_project_guid(value: &str) -> &str {
    match require_guid(value) {
        Ok(value) => value,
        Err(err) => {
            print_error(&format!("--project: {err}"));
            std::process::exit(2);
        }
    }
}

fn cmd_projects(args: &[String]) -> i32 {
    let detailed = args.iter().any(|a| a == "--detailed");
    let creds = load_credentials();
    print_info(&format!("connected as {}", creds.masked()));

    let mut platform = InMemoryPlatform::seeded();
    match platform.list_projects() {
        Ok(projects) => {
            print_projects(&projects, detailed);
            0
        }
        Err(err) => {
            print_error(&format!("listing projects failed: {err}"));
            5
        }
    }
}

fn cmd_stats(args: &[String]) -> i32 {
    let detailed = args.iter().any(|a| a == "--detailed");
    let mut export: Option<PathBuf> = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--export" {
            i += 1;
            if i >= args.len() {
                usage_exit();
            }
            export = Some(PathBuf::from(&args[i]));
        }
        i += 1;
    }

    let _creds = load_credentials();
    let mut platform = InMemoryPlatform::seeded();
    let projects = match platform.list_projects() {
        Ok(p) => p,
        Err(err) => {
            print_error(&format!("listing projects failed: {err}"));
            return 5;
        }
    };

    let stats = TenantStatistics::calculate(&projects);
    print_statistics(&stats, detailed);

    if let Some(path) = export {
        if let Err(err) = export_statistics_csv(&stats, &path) {
            print_error(&format!("export failed: {err}"));
            return 5;
        }
        print_success(&format!("statistics exported to {}", path.display()));
    }
    0
}

struct MonitorArgs {
    project: String,
    execution: String,
    settings: PollSettings,
}

fn parse_monitor_args(args: &[String]) -> MonitorArgs {
    let mut project: Option<String> = None;
    let mut execution: Option<String> = None;
    let mut settings = PollSettings::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--project" => {
                i += 1;
                if i < args.len() {
                    project = Some(args[i].clone());
                }
            }
            "--execution" => {
                i += 1;
                if i < args.len() {
                    execution = Some(args[i].clone());
                }
            }
            "--interval" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<u64>().ok()) {
                    Some(secs) if secs > 0 => settings.interval = Duration::from_secs(secs),
                    _ => usage_exit(),
                }
            }
            "--max-minutes" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<u64>().ok()) {
                    Some(mins) if mins > 0 => settings.max_duration = Duration::from_secs(mins * 60),
                    _ => usage_exit(),
                }
            }
            _ => usage_exit(),
        }
        i += 1;
    }

    match (project, execution) {
        (Some(project), Some(execution)) => {
            require_project_guid(&project);
            MonitorArgs { project, execution, settings }
        }
        _ => usage_exit(),
    }
}

fn cmd_monitor(args: &[String]) -> i32 {
    let parsed = parse_monitor_args(args);
    let _creds = load_credentials();

    let mut platform = InMemoryPlatform::seeded();
    let mut clock = SystemClock;
    let result = ExecutionMonitor::new(&mut platform, &mut clock, &parsed.project, &parsed.execution)
        .monitor(&parsed.settings, &mut ConsoleSink);

    match result {
        Ok(report) => {
            print_monitor_summary(&report);
            if report.outcome.is_success() {
                0
            } else {
                1
            }
        }
        Err(err) => {
            print_error(&format!("monitoring failed: {err}"));
            5
        }
    }
}

fn parse_pipeline_config(args: &[String]) -> (Option<String>, PipelineConfig) {
    let mut project: Option<String> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut sources: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--project" => {
                i += 1;
                if i < args.len() {
                    project = Some(args[i].clone());
                }
            }
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(PathBuf::from(&args[i]));
                }
            }
            "--source" => {
                i += 1;
                if i < args.len() {
                    sources.push(args[i].clone());
                }
            }
            _ => usage_exit(),
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                print_error(&format!("cannot read config {}: {err}", path.display()));
                std::process::exit(2);
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                print_error(&format!("invalid pipeline config: {err}"));
                std::process::exit(2);
            }
        }
    } else if !sources.is_empty() {
        PipelineConfig::from_source_paths(&sources)
    } else {
        PipelineConfig::demo()
    };

    (project, config)
}

fn cmd_pipeline(args: &[String]) -> i32 {
    let (project, config) = parse_pipeline_config(args);
    let _creds = load_credentials();

    let mut platform = InMemoryPlatform::seeded();
    let project_id = match &project {
        Some(id) => require_project_guid(id).to_string(),
        // Sin --project se usa el primer proyecto activo del tenant.
        None => match platform.list_projects() {
            Ok(projects) => match projects.iter().find(|p| p.is_active) {
                Some(p) => p.project_id.clone(),
                None => {
                    print_error("tenant has no active projects");
                    return 1;
                }
            },
            Err(err) => {
                print_error(&format!("listing projects failed: {err}"));
                return 5;
            }
        },
    };

    let summary = EtlPipeline::new(&mut platform, SystemClock, &project_id).run(&config);
    print_pipeline_summary(&summary);
    0
}

fn cmd_download(args: &[String]) -> i32 {
    let mut project: Option<String> = None;
    let mut execution: Option<String> = None;
    let mut dir = PathBuf::from("downloads");
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--project" => {
                i += 1;
                if i < args.len() {
                    project = Some(args[i].clone());
                }
            }
            "--execution" => {
                i += 1;
                if i < args.len() {
                    execution = Some(args[i].clone());
                }
            }
            "--dir" => {
                i += 1;
                if i < args.len() {
                    dir = PathBuf::from(&args[i]);
                }
            }
            _ => usage_exit(),
        }
        i += 1;
    }
    let (project, execution) = match (project, execution) {
        (Some(p), Some(e)) => (p, e),
        _ => usage_exit(),
    };
    require_project_guid(&project);

    let _creds = load_credentials();
    let mut platform = InMemoryPlatform::seeded();

    match download_execution_package(&mut platform, &project, &execution) {
        Ok(payload) => match save_package(&dir, &execution, &payload) {
            Ok(path) => {
                print_success(&format!("package saved to {}", path.display()));
                0
            }
            Err(err) => {
                print_error(&format!("saving package failed: {err}"));
                5
            }
        },
        Err(AdapterError::NotCompleted(status)) => {
            print_error(&format!("execution has not completed (status: {status})"));
            1
        }
        Err(err) => {
            print_error(&format!("download failed: {err}"));
            5
        }
    }
}

fn main() {
    // Cargar .env si existe antes de leer credenciales.
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage_exit();
    }

    let rest = &args[2..];
    let code = match args[1].as_str() {
        "projects" => cmd_projects(rest),
        "stats" => cmd_stats(rest),
        "monitor" => cmd_monitor(rest),
        "pipeline" => cmd_pipeline(rest),
        "download" => cmd_download(rest),
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            0
        }
        other => {
            eprintln!("unknown command: {other}");
            usage_exit();
        }
    };
    std::process::exit(code);
}
