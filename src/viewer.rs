use crate::model::{DiskDescriptor, Fit};

pub const NOT_FOUND_MESSAGE: &str = "No se encontró información del disco.";
pub const TREE_PLACEHOLDER: &str = "[Aquí se mostrará la estructura de carpetas e inodos]";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailScreen {
    Found {
        title: String,
        attributes: Vec<(&'static str, String)>,
        tree: Vec<String>,
    },
    NotFound {
        title: String,
    },
}

impl DetailScreen {
    pub fn title(&self) -> &str {
        match self {
            DetailScreen::Found { title, .. } | DetailScreen::NotFound { title } => title,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailScreen::Found { .. })
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            DetailScreen::Found {
                attributes, tree, ..
            } => {
                let mut lines: Vec<String> = attributes
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                lines.push(String::new());
                lines.extend(tree.iter().cloned());
                lines
            }
            DetailScreen::NotFound { .. } => vec![NOT_FOUND_MESSAGE.to_string()],
        }
    }
}

pub struct DiskDetailView;

impl DiskDetailView {
    /// Builds the detail screen from what navigation carried. Never fetches.
    pub fn render(disk_id: &str, disk: Option<&DiskDescriptor>) -> DetailScreen {
        let title = format!("Explorador del Disco: {}", disk_id);
        let Some(disk) = disk else {
            tracing::debug!(disk = disk_id, "detail opened without a carried disk");
            return DetailScreen::NotFound { title };
        };

        DetailScreen::Found {
            title,
            attributes: vec![
                ("Nombre", disk.name.clone()),
                ("Ruta", disk.path.clone().unwrap_or_default()),
                ("Tamaño", disk.size.to_string()),
                ("Fit", fit_text(&disk.fit)),
                ("Particiones Montadas", disk.mounted_partitions.join(", ")),
            ],
            tree: vec![TREE_PLACEHOLDER.to_string()],
        }
    }
}

/// `FF (first)` for the known policies, the bare code otherwise.
fn fit_text(fit: &Fit) -> String {
    match fit {
        Fit::Other(code) => code.clone(),
        _ => format!("{} ({})", fit, fit.label()),
    }
}

#[cfg(test)]
#[path = "tests/viewer_tests.rs"]
mod tests;
