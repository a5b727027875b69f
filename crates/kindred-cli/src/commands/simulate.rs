use anyhow::{Result, bail};
use kindred_application::{ConversationFlow, SimulationUseCase, SubmitOutcome};
use kindred_core::KindredError;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::prompts::print_prompt;

pub async fn start(usecase: &SimulationUseCase) -> Result<()> {
    if let Some(id) = usecase.active_id().await? {
        bail!(
            "simulation {} is still active; answer it or run `kindred simulate abandon`",
            id
        );
    }

    let flow = usecase.start().await?;
    println!("Started simulation {}", flow.simulation_id());
    print_current(usecase, &flow);
    Ok(())
}

pub async fn status(usecase: &SimulationUseCase) -> Result<()> {
    let Some(flow) = usecase.resume().await? else {
        println!("No active simulation. Run `kindred simulate start` to begin.");
        return Ok(());
    };

    println!(
        "Simulation {}: {} ({:.0}% complete)",
        flow.simulation_id(),
        usecase.phase(&flow),
        usecase.progress_percent(&flow)
    );
    print_current(usecase, &flow);
    Ok(())
}

pub async fn answer(usecase: &SimulationUseCase, answer: &str) -> Result<()> {
    let mut flow = active(usecase).await?;
    let outcome = submit(usecase, &mut flow, answer).await?;
    report(usecase, &flow, outcome);
    Ok(())
}

pub async fn finalize(usecase: &SimulationUseCase) -> Result<()> {
    let mut flow = active(usecase).await?;
    usecase.finalize(&mut flow).await?;
    println!("Simulation {} completed.", flow.simulation_id());
    Ok(())
}

/// Deletes the active simulation even when its stored answers can no longer
/// be restored.
pub async fn abandon(usecase: &SimulationUseCase) -> Result<()> {
    let Some(id) = usecase.active_id().await? else {
        bail!("no active simulation to abandon");
    };
    if usecase.abandon_id(id).await? {
        println!("Simulation {} deleted.", id);
    } else {
        println!("Simulation {} was already gone.", id);
    }
    Ok(())
}

/// Resumes or starts a simulation and answers prompts read from stdin until
/// the sequence is complete or input ends.
pub async fn run(usecase: &SimulationUseCase) -> Result<()> {
    let mut flow = match usecase.resume().await? {
        Some(flow) => flow,
        None => usecase.start().await?,
    };
    if usecase.engine().is_complete(flow.session()) {
        usecase.finalize(&mut flow).await?;
        println!("Every question is already answered.");
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_current(usecase, &flow);
        let Some(line) = lines.next_line().await? else {
            println!("Input closed; progress is saved.");
            return Ok(());
        };

        match submit(usecase, &mut flow, line.trim()).await {
            Ok(SubmitOutcome::Completed) => {
                report(usecase, &flow, SubmitOutcome::Completed);
                return Ok(());
            }
            Ok(_) => println!(),
            Err(e) if e.is_invalid_choice() || e.is_retryable() => {
                eprintln!("{}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

pub async fn history(usecase: &SimulationUseCase) -> Result<()> {
    let simulations = usecase.history().await?;
    if simulations.is_empty() {
        println!("No simulations yet.");
        return Ok(());
    }

    for simulation in simulations {
        let started = simulation
            .started_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>4}  {:<9}  {:>5.1}%  {}  {}",
            simulation.id, simulation.status, simulation.completion_rate, started, simulation.name
        );
    }
    Ok(())
}

async fn active(usecase: &SimulationUseCase) -> Result<ConversationFlow> {
    match usecase.resume().await {
        Ok(Some(flow)) => Ok(flow),
        Ok(None) => bail!("no active simulation; run `kindred simulate start` first"),
        Err(e) if e.is_corrupt_session() => {
            bail!("{}; run `kindred simulate abandon` to discard it", e)
        }
        Err(e) => Err(e.into()),
    }
}

/// A positive number selects a choice by position, anything else must match
/// a choice verbatim.
async fn submit(
    usecase: &SimulationUseCase,
    flow: &mut ConversationFlow,
    answer: &str,
) -> Result<SubmitOutcome, KindredError> {
    match answer.parse::<usize>() {
        Ok(number) if number > 0 => usecase.submit_choice(flow, number - 1).await,
        _ => usecase.submit(flow, answer).await,
    }
}

fn report(usecase: &SimulationUseCase, flow: &ConversationFlow, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Advanced { progress, .. } => {
            println!("Saved ({:.0}% complete).", progress);
            print_current(usecase, flow);
        }
        SubmitOutcome::Completed => {
            println!("Simulation {} completed.", flow.simulation_id());
        }
    }
}

fn print_current(usecase: &SimulationUseCase, flow: &ConversationFlow) {
    let engine = usecase.engine();
    if let Some(prompt) = engine.current_prompt(flow.session()) {
        print_prompt(prompt, flow.session().cursor() + 1, engine.prompt_count());
    } else if !flow.is_finalized() {
        println!("Every question is answered. Run `kindred simulate finalize` to complete it.");
    }
}
