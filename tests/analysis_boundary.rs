use lattice_paths::{
    counters::count_paths_recursive_guarded, run_analysis, AnalysisInput, PathCount, PathError,
    RecursiveOutcome, Variant,
};

fn quick(size: usize) -> AnalysisInput {
    AnalysisInput {
        recursive_cutoff: 10,
        recursive_limit: 12,
        ..AnalysisInput::new(size)
    }
}

#[test]
fn basic_variant_bounds() {
    for size in [0usize, 16, 100] {
        let input = AnalysisInput {
            variant: Variant::Basic,
            ..quick(size)
        };
        match run_analysis(&input) {
            Err(PathError::InputOutOfRange { value, min, max }) => {
                assert_eq!(value, size);
                assert_eq!(min, 1);
                assert_eq!(max, 15);
            }
            other => panic!("expected InputOutOfRange for {size}, got {other:?}"),
        }
    }
}

#[test]
fn extended_upper_bound() {
    let err = AnalysisInput::new(10_001).validate().unwrap_err();
    assert_eq!(err.exit_status(), 2);
    assert!(AnalysisInput::new(10_000).validate().is_ok());
}

#[test]
fn ten_agrees_and_sweeps() {
    let report = run_analysis(&quick(10)).unwrap();
    assert_eq!(report.iterative.count, PathCount::from(184_756u32));
    assert_eq!(report.counts_agree(), Some(true));
    assert!(report.matches_closed_form());
    let sweep = report.sweep.unwrap();
    assert!(sweep.samples.iter().all(|s| s.recursive.is_some()));
}

#[test]
fn large_size_refuses_recursion_but_counts() {
    let report = run_analysis(&AnalysisInput {
        step: 25,
        recursive_cutoff: 4,
        ..quick(60)
    })
    .unwrap();
    match report.recursive {
        RecursiveOutcome::TooLarge { size, limit, .. } => {
            assert_eq!(size, 60);
            assert_eq!(limit, 12);
        }
        RecursiveOutcome::Computed(_) => panic!("recursion at n=60 must be refused"),
    }
    assert!(report.matches_closed_form());
}

#[test]
fn guarded_recursion_error_exit_status() {
    let err = count_paths_recursive_guarded(25, 25, 20).unwrap_err();
    assert!(matches!(err, PathError::ComputationTooLarge { size: 25, limit: 20 }));
    assert_eq!(err.exit_status(), 3);
}
