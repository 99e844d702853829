//! End-to-end flows: populate a registry, synthesize under each strategy,
//! execute the result, and check the approximation report against the
//! exhaustive ground truth.

use std::collections::HashMap;

use agent_synth::{
    compute_pareto_front, evaluate_approximation, AgentExecutor, BeamSynthesizer,
    CapabilityRegistry, ComponentMetadata, ComponentType, EvaluationHarness, ExecutionMode,
    ExhaustiveSynthesizer, HeuristicSynthesizer, PrivacyLevel, RandomSynthesizer, SynthesisBudget,
    Synthesizer, TaskSpecification,
};

fn build_registry() -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();
    let components = [
        ("fast-cheap-model", "reasoning", 0.5, 50.0, 0.95),
        ("slow-accurate-model", "reasoning", 2.0, 400.0, 0.99),
        ("web-search", "retrieval", 0.1, 200.0, 0.9),
        ("local-index", "retrieval", 0.05, 20.0, 0.85),
        ("output-verifier", "verification", 0.2, 30.0, 0.97),
    ];
    for (name, cap, cost, latency, reliability) in components {
        registry
            .register(
                ComponentMetadata::new(
                    name,
                    ComponentType::Tool,
                    vec![cap.to_string()],
                    cost,
                    latency,
                    reliability,
                    PrivacyLevel::External,
                )
                .unwrap(),
            )
            .unwrap();
    }
    registry
}

fn sample_task() -> TaskSpecification {
    TaskSpecification::new(
        vec![
            "retrieval".to_string(),
            "reasoning".to_string(),
            "verification".to_string(),
        ],
        Some(5.0),
        Some(1000.0),
        None,
        HashMap::new(),
    )
    .unwrap()
}

#[test]
fn exhaustive_frontier_contains_only_non_dominated_pareto_optimal_candidates() {
    let registry = build_registry();
    let task = sample_task();

    let all_feasible = ExhaustiveSynthesizer::new(&registry)
        .synthesize(&task, None)
        .unwrap();
    assert!(!all_feasible.is_empty());

    let front = compute_pareto_front(&all_feasible);
    assert!(!front.is_empty());
    assert!(front.len() <= all_feasible.len());
}

#[test]
fn every_synthesizer_produces_a_frontier_that_executes_successfully_end_to_end() {
    let registry = build_registry();
    let task = sample_task();

    let heuristic = HeuristicSynthesizer::new(&registry)
        .synthesize(&task, None)
        .unwrap();
    let beam = BeamSynthesizer::new(&registry, 3)
        .synthesize(&task, None)
        .unwrap();
    let random = RandomSynthesizer::new(&registry)
        .synthesize(&task, Some(SynthesisBudget::new().with_max_evaluations(50).with_random_seed(7)))
        .unwrap();

    for frontier in [heuristic, beam, random] {
        assert!(!frontier.is_empty());
        for candidate in &frontier {
            let mut executor = AgentExecutor::new(ExecutionMode::Deterministic, Some(1));
            let result = executor.execute(candidate.graph()).unwrap();
            let summary = result.summary();
            assert!(summary.success);
            assert_eq!(summary.steps, task.required_capabilities.len());
        }
    }
}

#[test]
fn approximation_report_against_the_exhaustive_ground_truth_is_well_formed() {
    let registry = build_registry();
    let task = sample_task();

    let true_frontier = compute_pareto_front(
        &ExhaustiveSynthesizer::new(&registry)
            .synthesize(&task, None)
            .unwrap(),
    );
    let approx_frontier = HeuristicSynthesizer::new(&registry)
        .synthesize(&task, None)
        .unwrap();

    let reference_point = (100.0, 10_000.0, 0.0);
    let report = evaluate_approximation(&approx_frontier, &true_frontier, reference_point);

    for key in [
        "coverage",
        "hypervolume_loss",
        "avg_cost_regret",
        "avg_latency_regret",
        "avg_reliability_regret",
    ] {
        let value = report[key];
        assert!(value.is_finite(), "{key} was not finite: {value}");
        assert!(value >= 0.0, "{key} was negative: {value}");
    }
    pretty_assertions::assert_eq!(report["coverage"] <= 1.0, true);
}

#[test]
fn harness_runs_the_full_matrix_and_reports_success_rates_in_bounds() {
    let registry = build_registry();

    let mut tasks = HashMap::new();
    tasks.insert("primary".to_string(), sample_task());

    let mut synthesizers: HashMap<String, Box<dyn Synthesizer>> = HashMap::new();
    synthesizers.insert(
        "heuristic".to_string(),
        Box::new(HeuristicSynthesizer::new(&registry)),
    );
    synthesizers.insert(
        "beam-3".to_string(),
        Box::new(BeamSynthesizer::new(&registry, 3)),
    );

    let harness =
        EvaluationHarness::new(tasks, synthesizers, 10, ExecutionMode::Probabilistic, Some(42));
    let results = harness.run().unwrap();

    assert_eq!(results.len(), 2);
    for result in &results {
        assert!((0.0..=1.0).contains(&result.success_rate));
        assert!(result.avg_cost >= 0.0);
        assert!(result.avg_latency >= 0.0);
    }
}

#[test]
fn task_with_no_satisfiable_capability_yields_empty_frontiers_everywhere() {
    let registry = build_registry();
    let task = TaskSpecification::new(
        vec!["nonexistent-capability".to_string()],
        None,
        None,
        None,
        HashMap::new(),
    )
    .unwrap();

    assert!(ExhaustiveSynthesizer::new(&registry)
        .synthesize(&task, None)
        .unwrap()
        .is_empty());
    assert!(BeamSynthesizer::new(&registry, 2)
        .synthesize(&task, None)
        .unwrap()
        .is_empty());
    assert!(RandomSynthesizer::new(&registry)
        .synthesize(&task, Some(SynthesisBudget::new().with_max_evaluations(10)))
        .unwrap()
        .is_empty());
    assert!(HeuristicSynthesizer::new(&registry)
        .synthesize(&task, None)
        .is_err());
}
