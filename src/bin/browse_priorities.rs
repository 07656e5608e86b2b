//! Command-line walkthrough of the searchable list controller over an
//! in-memory priority catalog.
//!
//! Simulates the interactions a UI would produce (typing, paging,
//! clearing) and prints a JSON view snapshot after each one.

use std::time::Duration;

use serde::Serialize;

use search_pagination::provider::memory::InMemoryProvider;
use search_pagination::{SearchConfig, SearchController, ViewState};

#[derive(Debug, Clone, Serialize)]
struct Prioridad {
    id: usize,
    descripcion: String,
    dias_compromiso: u32,
}

fn seed_priorities() -> Vec<Prioridad> {
    let labels = [
        ("Urgente", 1),
        ("Crítica", 2),
        ("Alta", 3),
        ("Media", 7),
        ("Baja", 15),
        ("Planificada", 30),
        ("Mantenimiento", 45),
        ("Revisión trimestral", 90),
    ];

    labels
        .iter()
        .enumerate()
        .flat_map(|(i, (label, days))| {
            (1..=4).map(move |n| Prioridad {
                id: i * 4 + n,
                descripcion: format!("{label} - nivel {n}"),
                dias_compromiso: days * n as u32,
            })
        })
        .collect()
}

async fn wait_until_settled<P>(
    controller: &SearchController<Prioridad, P>,
) -> Result<ViewState<Prioridad>, Box<dyn std::error::Error>>
where
    P: search_pagination::SearchProvider<Prioridad> + 'static,
{
    let mut changes = controller.subscribe();
    loop {
        let view = controller.view();
        if !view.is_loading {
            return Ok(view);
        }
        changes.changed().await?;
    }
}

fn print_snapshot(label: &str, view: &ViewState<Prioridad>) {
    log::info!("{label}");
    match serde_json::to_string_pretty(view) {
        Ok(snapshot) => println!("--- {label}\n{snapshot}"),
        Err(err) => log::error!("Failed to serialize view state: {err}"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let provider = InMemoryProvider::new(seed_priorities(), |item: &Prioridad, text| {
        item.descripcion.to_lowercase().contains(&text.to_lowercase())
    });

    let config = SearchConfig {
        placeholder: "Buscar prioridades...".to_string(),
        debounce_delay_ms: 300,
        page_size: 5,
        load_on_init: true,
    };

    let controller = SearchController::builder(provider, config)
        .item_renderer(|p: &Prioridad| {
            format!("{} ({} días de compromiso)", p.descripcion, p.dias_compromiso)
        })
        .on_selected(|p: &Prioridad| log::info!("Seleccionada: {}", p.descripcion))
        .start()?;

    let view = wait_until_settled(&controller).await?;
    print_snapshot("initial load", &view);

    // A burst of keystrokes; only the last one survives the debounce.
    for text in ["u", "ur", "urg"] {
        controller.on_text_changed(text);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    // Let the quiet period elapse so the query fires.
    tokio::time::sleep(Duration::from_millis(350)).await;
    let view = wait_until_settled(&controller).await?;
    print_snapshot("after typing \"urg\"", &view);

    if let Some(lines) = controller.rendered_items() {
        for line in lines {
            println!("  {line}");
        }
    }
    controller.select(0);

    controller.clear_search();
    let view = wait_until_settled(&controller).await?;
    print_snapshot("after clearing the search", &view);

    controller.next_page();
    let view = wait_until_settled(&controller).await?;
    print_snapshot("after moving to the next page", &view);

    Ok(())
}
