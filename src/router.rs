use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::model::DiskDescriptor;
use crate::viewer::{DetailScreen, DiskDetailView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Console,
    Catalog,
    Viewer { name: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown path: {0}")]
    UnknownPath(String),
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let p = trimmed.trim_end_matches('/');
        match p {
            "" => return Ok(Route::Console),
            "/discos" => return Ok(Route::Catalog),
            _ => {}
        }
        if let Some(name) = p.strip_prefix("/viewer/")
            && !name.is_empty()
            && !name.contains('/')
        {
            return Ok(Route::Viewer {
                name: name.to_string(),
            });
        }
        Err(RouteError::UnknownPath(trimmed.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Console => f.write_str("/"),
            Route::Catalog => f.write_str("/discos"),
            Route::Viewer { name } => write!(f, "/viewer/{}", name),
        }
    }
}

/// Descriptors handed over by a navigation, keyed by disk name.
#[derive(Debug, Default)]
pub struct NavigationStore {
    disks: HashMap<String, DiskDescriptor>,
}

impl NavigationStore {
    pub fn put(&mut self, disk: DiskDescriptor) {
        self.disks.insert(disk.name.clone(), disk);
    }

    pub fn get(&self, name: &str) -> Option<&DiskDescriptor> {
        self.disks.get(name)
    }

    pub fn clear(&mut self) {
        self.disks.clear();
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }
}

#[derive(Debug)]
pub enum Screen {
    Console,
    Catalog,
    Viewer(DetailScreen),
}

#[derive(Debug)]
pub struct Router {
    current: Route,
    carried: NavigationStore,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            current: Route::Console,
            carried: NavigationStore::default(),
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn navigation_store(&self) -> &NavigationStore {
        &self.carried
    }

    pub fn navigate(&mut self, route: Route, carried: Option<DiskDescriptor>) {
        if matches!(self.current, Route::Viewer { .. }) && route != self.current {
            self.carried.clear();
        }
        if let (Route::Viewer { name }, Some(disk)) = (&route, carried) {
            if disk.name == *name {
                self.carried.put(disk);
            } else {
                tracing::warn!(route = %route, disk = %disk.name, "carried disk does not match route");
            }
        }
        tracing::debug!(from = %self.current, to = %route, "navigate");
        self.current = route;
    }

    pub fn navigate_path(
        &mut self,
        path: &str,
        carried: Option<DiskDescriptor>,
    ) -> Result<(), RouteError> {
        let route: Route = path.parse()?;
        self.navigate(route, carried);
        Ok(())
    }

    /// Open the detail screen for `disk`, carrying it along.
    pub fn open_disk(&mut self, disk: DiskDescriptor) {
        let route = Route::Viewer {
            name: disk.name.clone(),
        };
        self.navigate(route, Some(disk));
    }

    pub fn clear(&mut self) {
        self.carried.clear();
    }

    pub fn screen(&self) -> Screen {
        match &self.current {
            Route::Console => Screen::Console,
            Route::Catalog => Screen::Catalog,
            Route::Viewer { name } => {
                Screen::Viewer(DiskDetailView::render(name, self.carried.get(name)))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
