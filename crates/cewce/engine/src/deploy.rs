//! Fake deploy hashes for the simulated chain

/// Produce a deploy-hash-shaped string, e.g. `0x8f3d...ab12`.
///
/// Random, not a hash of anything. The demo only needs something that
/// renders like a chain reference.
pub fn simulated_deploy_hash() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("0x{}...{}", &hex[..4], &hex[hex.len() - 4..])
}
