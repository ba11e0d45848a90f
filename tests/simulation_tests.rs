// tests/simulation_tests.rs

use chp_sim::{
    BitSequence, BitSource, ChpError, ChpSimulator, FixedBits, MeasureBasis, MeasureResult,
    Operation, SimulatorConfig, Tableau, validate_tableau,
};

fn determined(value: bool) -> MeasureResult {
    MeasureResult::new(value, true)
}

fn random(value: bool) -> MeasureResult {
    MeasureResult::new(value, false)
}

/// A three-qubit circuit whose tableau is small enough to check by hand.
fn prepare_kickback_circuit<B: BitSource>(sim: &mut ChpSimulator<B>) -> Result<(), ChpError> {
    sim.hadamard(2)?;
    sim.cnot(2, 0)?;
    sim.cnot(2, 1)?;
    sim.phase(0)?;
    sim.phase(1)?;
    sim.hadamard(0)?;
    sim.hadamard(1)?;
    sim.hadamard(2)?;
    Ok(())
}

#[test]
fn test_identity() -> Result<(), ChpError> {
    let mut s = ChpSimulator::new(1)?;
    assert_eq!(s.measure(0)?, determined(false));
    Ok(())
}

#[test]
fn test_identity_many_qubits() -> Result<(), ChpError> {
    let mut s = ChpSimulator::new(5)?;
    for q in 0..5 {
        assert_eq!(s.measure(q)?, determined(false));
    }
    assert_eq!(s.tableau(), &Tableau::new(5));
    Ok(())
}

#[test]
fn test_bit_flip() -> Result<(), ChpError> {
    let mut s = ChpSimulator::new(2)?;
    s.hadamard(0)?;
    s.phase(0)?;
    s.phase(0)?;
    s.hadamard(0)?;
    assert_eq!(s.measure(0)?, determined(true));
    assert_eq!(s.measure(1)?, determined(false));
    Ok(())
}

#[test]
fn test_epr() -> Result<(), ChpError> {
    for seed in 0..16 {
        let mut s = ChpSimulator::with_config(2, SimulatorConfig::new().with_seed(seed))?;
        s.hadamard(0)?;
        s.cnot(0, 1)?;
        let v1 = s.measure(0)?;
        assert!(v1.is_random());
        let v2 = s.measure(1)?;
        assert!(v2.is_determined());
        assert_eq!(v1.value(), v2.value());
    }
    Ok(())
}

#[test]
fn test_epr_outcomes_vary_with_seed() -> Result<(), ChpError> {
    let mut seen = [false; 2];
    for seed in 0..64 {
        let mut s = ChpSimulator::with_config(2, SimulatorConfig::new().with_seed(seed))?;
        s.hadamard(0)?;
        s.cnot(0, 1)?;
        seen[s.measure(0)?.value() as usize] = true;
    }
    assert_eq!(seen, [true, true], "64 seeds should produce both outcomes");
    Ok(())
}

#[test]
fn test_repeated_measurement_is_determined() -> Result<(), ChpError> {
    let mut s = ChpSimulator::with_config(3, SimulatorConfig::new().with_seed(5))?;
    s.hadamard(0)?;
    s.hadamard(1)?;
    s.cnot(1, 2)?;
    s.phase(1)?;
    s.hadamard(1)?;
    for q in 0..3 {
        let first = s.measure(q)?;
        let second = s.measure(q)?;
        assert!(second.is_determined(), "qubit {}", q);
        assert_eq!(first.value(), second.value(), "qubit {}", q);
    }
    Ok(())
}

#[test]
fn test_phase_kickback_consume_s_state() -> Result<(), ChpError> {
    for bit in [false, true] {
        let mut s = ChpSimulator::with_bit_source(2, FixedBits(bit))?;
        s.hadamard(1)?;
        s.phase(1)?;
        s.hadamard(0)?;
        s.cnot(0, 1)?;
        let v1 = s.measure(1)?;
        assert!(v1.is_random());
        if v1.into() {
            s.phase(0)?;
            s.phase(0)?;
        }
        s.phase(0)?;
        s.hadamard(0)?;
        assert_eq!(s.measure(0)?, determined(true));
    }
    Ok(())
}

#[test]
fn test_phase_kickback_preserve_s_state() -> Result<(), ChpError> {
    let mut s = ChpSimulator::new(2)?;

    // Prepare S state.
    s.hadamard(1)?;
    s.phase(1)?;

    // Prepare test input.
    s.hadamard(0)?;

    // Kickback.
    s.cnot(0, 1)?;
    s.hadamard(1)?;
    s.cnot(0, 1)?;
    s.hadamard(1)?;

    // Check.
    s.phase(0)?;
    s.hadamard(0)?;
    assert_eq!(s.measure(0)?, determined(true));
    s.phase(1)?;
    s.hadamard(1)?;
    assert_eq!(s.measure(1)?, determined(true));
    Ok(())
}

#[test]
fn test_kickback_vs_stabilizer() -> Result<(), ChpError> {
    let mut sim = ChpSimulator::with_bit_source(3, FixedBits(false))?;
    prepare_kickback_circuit(&mut sim)?;
    assert_eq!(
        sim.to_string(),
        "-Y..\n\
         -.Y.\n\
         +..X\n\
         ----\n\
         +X.X\n\
         +.XX\n\
         +YYZ"
    );

    let v0 = sim.measure(0)?;
    assert_eq!(
        sim.to_string(),
        "+X.X\n\
         -.Y.\n\
         +..X\n\
         ----\n\
         +Z..\n\
         +.XX\n\
         +ZYY"
    );

    let v1 = sim.measure(1)?;
    let collapsed = "+X.X\n\
                     +.XX\n\
                     +..X\n\
                     ----\n\
                     +Z..\n\
                     +.Z.\n\
                     -ZZZ";
    assert_eq!(sim.to_string(), collapsed);

    let v2 = sim.measure(2)?;
    assert_eq!(sim.to_string(), collapsed);

    assert_eq!(v0, random(false));
    assert_eq!(v1, random(false));
    assert_eq!(v2, determined(true));
    Ok(())
}

#[test]
fn test_kickback_parity_on_every_branch() -> Result<(), ChpError> {
    for b0 in [false, true] {
        for b1 in [false, true] {
            let mut sim = ChpSimulator::with_bit_source(3, BitSequence::new(vec![b0, b1]))?;
            prepare_kickback_circuit(&mut sim)?;
            let v0 = sim.measure(0)?;
            let v1 = sim.measure(1)?;
            let v2 = sim.measure(2)?;
            assert_eq!(v0, random(b0));
            assert_eq!(v1, random(b1));
            assert!(v2.is_determined());
            assert!(v0.value() ^ v1.value() ^ v2.value(), "branch ({}, {})", b0, b1);
            assert_eq!(sim.bit_source_mut().consumed(), 2);
            validate_tableau(sim.tableau())?;
        }
    }
    Ok(())
}

#[test]
fn test_round_trips_restore_tableau() -> Result<(), ChpError> {
    let mut sim = ChpSimulator::with_bit_source(3, FixedBits(false))?;
    prepare_kickback_circuit(&mut sim)?;
    let start = sim.tableau().clone();

    for q in 0..3 {
        sim.hadamard(q)?;
        sim.hadamard(q)?;
        assert_eq!(sim.tableau(), &start);

        for _ in 0..4 {
            sim.phase(q)?;
        }
        assert_eq!(sim.tableau(), &start);
    }
    for (c, t) in [(0, 1), (1, 0), (2, 0), (1, 2)] {
        sim.cnot(c, t)?;
        sim.cnot(c, t)?;
        assert_eq!(sim.tableau(), &start);
    }
    Ok(())
}

#[test]
fn test_ghz_across_word_boundary() -> Result<(), ChpError> {
    let n = 130;
    let mut sim = ChpSimulator::with_config(n, SimulatorConfig::new().with_seed(99))?;
    sim.hadamard(0)?;
    for q in 1..n {
        sim.cnot(q - 1, q)?;
    }
    validate_tableau(sim.tableau())?;

    let first = sim.measure(n - 1)?;
    assert!(first.is_random());
    for q in 0..n - 1 {
        assert_eq!(sim.measure(q)?, determined(first.value()), "qubit {}", q);
    }
    validate_tableau(sim.tableau())?;
    Ok(())
}

#[test]
fn test_rejected_calls_leave_state_untouched() -> Result<(), ChpError> {
    let mut sim = ChpSimulator::with_bit_source(2, FixedBits(false))?;
    sim.hadamard(0)?;
    let before = sim.tableau().clone();

    assert_eq!(
        sim.measure(2),
        Err(ChpError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
    );
    assert!(matches!(sim.cnot(0, 0), Err(ChpError::InvalidOperation { .. })));
    assert!(matches!(sim.cnot(3, 0), Err(ChpError::QubitOutOfRange { qubit: 3, .. })));
    assert!(matches!(
        sim.apply(&Operation::Measure { target: 4, basis: MeasureBasis::X }),
        Err(ChpError::QubitOutOfRange { qubit: 4, .. })
    ));
    assert_eq!(sim.tableau(), &before);
    Ok(())
}

#[test]
fn test_operation_stream() -> Result<(), ChpError> {
    let ops = vec![
        Operation::Hadamard { target: 0 },
        Operation::Cnot { control: 0, target: 1 },
        Operation::Cnot { control: 0, target: 2 },
        Operation::Measure { target: 0, basis: MeasureBasis::X },
        Operation::Measure { target: 1, basis: MeasureBasis::X },
        Operation::Measure { target: 2, basis: MeasureBasis::X },
        Operation::MeasureReset { target: 0, basis: MeasureBasis::Z },
        Operation::Measure { target: 0, basis: MeasureBasis::Z },
    ];
    let mut sim = ChpSimulator::with_bit_source(3, BitSequence::new(vec![true, false, true]))?;
    let results = sim.apply_all(&ops)?;
    assert_eq!(results.len(), 5);
    // GHZ in the X basis: the parity of the three outcomes is even.
    assert!(results[0].is_random());
    assert!(results[1].is_random());
    assert!(results[2].is_determined());
    assert!(!(results[0].value() ^ results[1].value() ^ results[2].value()));
    // Reset always ends in |0⟩.
    assert_eq!(results[4], determined(false));
    Ok(())
}
