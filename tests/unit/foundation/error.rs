use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RevealError::not_ready("x")
            .to_string()
            .contains("not ready:")
    );
    assert!(
        RevealError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_not_ready_is_recoverable() {
    assert!(RevealError::not_ready("geometry pending").is_not_ready());
    assert!(!RevealError::validation("bad").is_not_ready());
    assert!(!RevealError::evaluation("bad").is_not_ready());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
