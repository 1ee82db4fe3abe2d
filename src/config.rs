/// Runtime settings shared with request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Sales tax rate in basis points (825 = 8.25%).
    pub tax_rate_bp: i64,
}
