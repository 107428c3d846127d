use std::sync::Arc;

use anyhow::Context;
use hireflow_core::domain::{ApplicantId, NewRound, RoundKey};
use hireflow_core::impls::{RandomScorer, SimulatedEvaluator};
use hireflow_core::ports::SkillEvaluator;
use hireflow_core::{EvaluationSlot, EvaluationState, TriageBuilder, TriageConfig};
use log::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // (A) config: first argument is an optional JSON file
    let config = match std::env::args().nth(1) {
        Some(path) => TriageConfig::from_path(&path).with_context(|| format!("loading {path}"))?,
        None => TriageConfig::default(),
    };
    info!("hireflow starting (first round: {})", config.first_round_label);

    let mut workflow = TriageBuilder::new().config(config.clone()).build()?;
    let ranking: Vec<String> = workflow
        .ranking()
        .iter()
        .map(|a| format!("{} ({})", a.name, a.match_score))
        .collect();
    println!("ranking: {}", ranking.join(", "));

    // (B) accept the top applicant through the scheduler dialog
    let top = ApplicantId::from("app1");
    workflow.request_accept(&top)?;
    workflow.scheduler_mut().set_time(Some("10:00".parse()?));
    let record = workflow.confirm_schedule()?;
    println!("scheduled: {}", serde_json::to_string_pretty(&record)?);

    // (C) reject directly, no scheduling
    workflow.reject(&ApplicantId::from("app2"))?;

    // (D) drag the accepted applicant to the technical round
    let outcome = workflow.move_applicant(&top, &RoundKey::ordinal(1), &RoundKey::ordinal(2));
    info!("move {top}: {outcome:?}");

    // (E) add a round
    let key = workflow.add_round(NewRound::new("Panel Interview", "Senior Manager", "Board Room"))?;
    info!("new round key: {key}");

    // (F) one simulated skill evaluation
    let evaluator: Arc<dyn SkillEvaluator> = Arc::new(SimulatedEvaluator::new(
        config.evaluation_delay(),
        RandomScorer::new(config.score_range.min, config.score_range.max),
    ));
    let mut slot = EvaluationSlot::new();
    slot.evaluate_skill(evaluator, "TypeScript");
    match slot.wait().await {
        EvaluationState::Resolved(score) => println!("TypeScript: {score} ({})", score.rating()),
        other => warn!("evaluation did not resolve: {other:?}"),
    }

    println!("counts: {:?}", workflow.ledger().counts());
    println!("board: {}", serde_json::to_string_pretty(workflow.board().rounds())?);
    Ok(())
}
