use super::App;
use crate::chart::png;
use std::path::PathBuf;

impl App {
    /// Save the current chart as a PNG. Returns the written path, or `None`
    /// when there is no chart or the write failed (reported in the status).
    pub fn export_chart(&mut self) -> Option<PathBuf> {
        let Some(chart) = self.renderer.current() else {
            self.status_message = Some("No chart to export".to_string());
            return None;
        };

        let dir = self.export_dir();
        match png::export_chart(chart, &dir) {
            Ok(path) => {
                self.status_message = Some(format!(
                    "Exported to {} ({})",
                    path.display(),
                    png::legend(chart)
                ));
                Some(path)
            }
            Err(e) => {
                tracing::error!(error = %e, "chart export failed");
                self.status_message = Some(format!("Export failed: {}", e));
                None
            }
        }
    }

    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.config.export_dir {
            return dir.clone();
        }
        if let Some(home) = dirs::home_dir() {
            let downloads = home.join("Downloads");
            if downloads.exists() {
                return downloads;
            }
            return home;
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}
