use super::*;

impl EngineClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!(
                "{} endpoint not found (is {} a smia engine?)",
                label,
                self.base_url
            );
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
