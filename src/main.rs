//! Demostración completa contra el backend en memoria: proyectos,
//! estadísticas, pipeline ETL, monitoreo de una ejecución y workflow de
//! acción con descarga de paquete.
use std::time::Duration;

use mindzieflow_rust::config::CONFIG;
use mz_adapters::{print_error, print_info, print_monitor_summary, print_pipeline_summary, print_projects,
                  print_section, print_statistics, print_success, save_package, ConsoleSink, InMemoryPlatform};
use mz_core::{ActionWorkflow, EtlPipeline, ExecutionMonitor, PipelineConfig, PollSettings, ProjectClient, SystemClock,
              TenantStatistics};

const SALES_PROJECT: &str = "3f2b8c1e-5a47-4d06-9e13-7c55a2b4d901";

fn main() {
    print_section("mindzieFlow demo");
    match &CONFIG.credentials {
        Some(creds) => print_info(&format!("credentials loaded: {}", creds.masked())),
        None => print_info("credentials not set; running against the in-memory backend"),
    }

    let mut platform = InMemoryPlatform::seeded();
    let mut clock = SystemClock;

    // Proyectos y estadísticas del tenant.
    let projects = match platform.list_projects() {
        Ok(projects) => projects,
        Err(err) => {
            print_error(&format!("listing projects failed: {err}"));
            std::process::exit(5);
        }
    };
    print_projects(&projects, true);
    let stats = TenantStatistics::calculate(&projects);
    print_statistics(&stats, true);

    // Pipeline ETL de demostración.
    let summary = EtlPipeline::new(&mut platform, SystemClock, SALES_PROJECT).run(&PipelineConfig::demo());
    print_pipeline_summary(&summary);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => print_error(&format!("summary serialization failed: {err}")),
    }

    // Monitoreo en vivo de una ejecución guionada. Intervalo corto para
    // que el demo termine rápido; la configuración real viene de CONFIG.
    let demo_settings = PollSettings { interval: Duration::from_millis(200),
                                       ..CONFIG.poll };
    print_section("Monitoring exec-0002");
    match ExecutionMonitor::new(&mut platform, &mut clock, SALES_PROJECT, "exec-0002")
        .monitor(&demo_settings, &mut ConsoleSink)
    {
        Ok(report) => print_monitor_summary(&report),
        Err(err) => {
            print_error(&format!("monitoring failed: {err}"));
            std::process::exit(5);
        }
    }

    // Workflow completo de una acción, con descarga del paquete final.
    print_section("Action workflow: action-daily-refresh");
    let outcome = ActionWorkflow::new(&mut platform, &mut clock, SALES_PROJECT, "action-daily-refresh")
        .run(&demo_settings, &mut ConsoleSink);
    match outcome {
        Ok(workflow) => {
            print_info(&format!("execution {} finished after {} polls", workflow.execution_id, workflow.polls));
            if let Some(seconds) = workflow.run_seconds {
                print_info(&format!("server-side runtime: {seconds:.1}s"));
            }
            match workflow.package {
                Some(payload) => {
                    let dir = std::env::temp_dir().join("mindzieflow-demo");
                    match save_package(&dir, &workflow.execution_id, &payload) {
                        Ok(path) => print_success(&format!("package saved to {}", path.display())),
                        Err(err) => print_error(&format!("saving package failed: {err}")),
                    }
                }
                None => print_info("no package available for this execution"),
            }
            if !workflow.succeeded {
                std::process::exit(1);
            }
        }
        Err(err) => {
            print_error(&format!("workflow failed: {err}"));
            std::process::exit(5);
        }
    }

    print_success("demo complete");
}
