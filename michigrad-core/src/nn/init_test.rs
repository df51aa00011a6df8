use super::*;
use crate::error::MichigradError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_uniform_range() -> Result<(), MichigradError> {
    let mut rng = StdRng::seed_from_u64(7);
    let init = Init::default();
    for _ in 0..1000 {
        let x = init.sample(&mut rng)?;
        assert!((-1.0..=1.0).contains(&x), "sample {} out of [-1, 1]", x);
    }
    Ok(())
}

#[test]
fn test_sampling_is_reproducible() -> Result<(), MichigradError> {
    let init = Init::Normal { mean: 0.0, std: 0.5 };
    let draw = |seed| -> Result<Vec<f64>, MichigradError> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..5).map(|_| init.sample(&mut rng)).collect()
    };
    assert_eq!(draw(42)?, draw(42)?);
    assert_ne!(draw(42)?, draw(43)?);
    Ok(())
}

#[test]
fn test_constant() -> Result<(), MichigradError> {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(Init::Constant(0.25).sample(&mut rng)?, 0.25);
    Ok(())
}

#[test]
fn test_invalid_bounds() {
    let mut rng = StdRng::seed_from_u64(0);
    let reversed = Init::Uniform { low: 1.0, high: -1.0 };
    assert!(matches!(reversed.sample(&mut rng), Err(MichigradError::InvalidInit(_))));
    let nan = Init::Uniform { low: f64::NAN, high: 1.0 };
    assert!(nan.validate().is_err());
    let negative_std = Init::Normal { mean: 0.0, std: -1.0 };
    assert!(matches!(negative_std.validate(), Err(MichigradError::InvalidInit(_))));
    assert!(matches!(negative_std.sample(&mut rng), Err(MichigradError::InvalidInit(_))));
}

#[test]
fn test_normal_bounds() -> Result<(), MichigradError> {
    let mut rng = StdRng::seed_from_u64(0);
    // A zero std always draws the mean.
    assert_eq!(Init::Normal { mean: 0.5, std: 0.0 }.sample(&mut rng)?, 0.5);
    for init in [
        Init::Normal { mean: 0.0, std: f64::NAN },
        Init::Normal { mean: 0.0, std: f64::INFINITY },
        Init::Normal { mean: f64::NAN, std: 1.0 },
    ] {
        assert!(init.validate().is_err(), "{:?} accepted", init);
    }
    Ok(())
}
