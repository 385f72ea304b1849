use crate::engine::EngineApi;
use crate::model::DiskDescriptor;

#[derive(Debug, Default)]
pub struct DiskCatalog {
    disks: Vec<DiskDescriptor>,
    selected: usize,
    last_error: Option<String>,
}

impl DiskCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch failures are soft: the list ends up empty and the error is logged.
    pub fn fetch(&mut self, engine: &dyn EngineApi) {
        let res = engine.list_disks();
        self.apply(res);
    }

    pub fn apply(&mut self, res: anyhow::Result<Vec<DiskDescriptor>>) {
        match res {
            Ok(disks) => {
                tracing::debug!(count = disks.len(), "disk catalog loaded");
                self.disks = disks;
                self.last_error = None;
            }
            Err(err) => {
                let msg = format!("{:#}", err);
                tracing::warn!(error = %msg, "Error al cargar discos");
                self.disks.clear();
                self.last_error = Some(msg);
            }
        }
        self.selected = self.selected.min(self.disks.len().saturating_sub(1));
    }

    pub fn disks(&self) -> &[DiskDescriptor] {
        &self.disks
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.disks.is_empty() {
            self.selected = 0;
            return;
        }
        let max = self.disks.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    /// Picks a disk for navigation. No request is made.
    pub fn select(&self, index: usize) -> Option<DiskDescriptor> {
        self.disks.get(index).cloned()
    }

    pub fn select_current(&self) -> Option<DiskDescriptor> {
        self.select(self.selected)
    }

    pub fn find(&self, name: &str) -> Option<DiskDescriptor> {
        self.disks.iter().find(|d| d.name == name).cloned()
    }
}

pub fn entry_lines(disk: &DiskDescriptor) -> Vec<String> {
    vec![
        disk.name.clone(),
        format!("Capacidad: {}", disk.size),
        format!("Fit: {}", disk.fit),
        format!("Particiones: {}", disk.partitions_label()),
    ]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
