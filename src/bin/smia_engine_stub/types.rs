use super::*;

pub(super) const INVALID_REQUEST: &str = "Error: Petición inválida";
pub(super) const NO_COMMANDS: &str = "No se ejecutó ningún comando";
pub(super) const LOGIN_OK: &str = "Login exitoso";
pub(super) const LOGIN_BAD_CREDENTIALS: &str = "Usuario o contraseña incorrectos";
pub(super) const LOGIN_NOT_MOUNTED: &str = "Partición no montada";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct StubUser {
    pub(super) name: String,
    pub(super) password: String,
    pub(super) partition_id: String,
}

pub(super) fn parse_user(raw: &str) -> Result<StubUser> {
    let mut parts = raw.splitn(3, ':');
    let (Some(name), Some(password), Some(partition_id)) =
        (parts.next(), parts.next(), parts.next())
    else {
        anyhow::bail!("invalid --user {:?} (expected name:password:partition)", raw);
    };
    if name.is_empty() || password.is_empty() || partition_id.is_empty() {
        anyhow::bail!("invalid --user {:?} (empty field)", raw);
    }
    Ok(StubUser {
        name: name.to_string(),
        password: password.to_string(),
        partition_id: partition_id.to_string(),
    })
}

#[derive(Clone, Debug, Default, serde::Serialize)]
pub(super) struct Stats {
    pub(super) execute_requests: u64,
    pub(super) last_user: Option<String>,
    pub(super) last_partition_id: Option<String>,
}

pub(super) struct StubState {
    pub(super) disks: Vec<DiskDescriptor>,
    pub(super) users: Vec<StubUser>,
    pub(super) execute_delay: Duration,
    pub(super) fail_execute: bool,
    pub(super) stats: RwLock<Stats>,
}

impl StubState {
    pub(super) fn partition_mounted(&self, id: &str) -> bool {
        self.users.iter().any(|u| u.partition_id == id)
            || self
                .disks
                .iter()
                .any(|d| d.mounted_partitions.iter().any(|p| p == id))
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ExecuteBody {
    pub(super) command: String,

    #[serde(default)]
    pub(super) user: Option<String>,

    #[serde(rename = "partitionId", default)]
    pub(super) partition_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginBody {
    pub(super) username: String,
    pub(super) password: String,

    #[serde(default)]
    pub(super) partition_id: String,
}
