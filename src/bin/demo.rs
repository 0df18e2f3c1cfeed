use colored::*;
use session_ledger::config::Config;
use session_ledger::domain::models::session::Capacity;
use session_ledger::domain::services::ledger::SessionLedger;
use session_ledger::infra::factory::bootstrap_ledger;

#[tokio::main]
async fn main() {
    let _guard = session_ledger::init_logging();
    let config = Config::from_env();

    println!("{}", "🥊 Session Ledger Demo".bold().green());
    println!("Loading seed data ({}ms pacing)...", config.load_delay_ms);

    let mut ledger = bootstrap_ledger(&config).await;
    print_sessions(&ledger);

    let Some(first_id) = ledger.sessions().first().map(|s| s.session.id.clone()) else {
        println!("{}", "No sessions loaded, nothing to demo.".red());
        return;
    };

    println!("\n{}", "➕ Registering 'Nina Rousseau'...".yellow());
    match ledger.register(&first_id, "Nina Rousseau") {
        Ok(p) => {
            print_sessions(&ledger);

            println!("\n{}", "➖ Unregistering her again...".yellow());
            ledger.unregister(&first_id, &p.id);
            print_sessions(&ledger);
        }
        Err(e) => println!("{}", format!("Registration refused: {}", e).red()),
    }
}

fn print_sessions(ledger: &SessionLedger) {
    for entry in ledger.sessions() {
        let spots = match entry.available_spots {
            Capacity::Unlimited => "∞".to_string(),
            Capacity::Limited(n) => n.to_string(),
        };
        println!(
            "  {:<22} {} {}  total {:>6.2} €  per person {:>6.2} €  {} spot(s) left",
            entry.session.title,
            entry.session.date,
            entry.session.time.format("%H:%M"),
            entry.session.price,
            entry.cost_per_person,
            spots,
        );
    }
}
