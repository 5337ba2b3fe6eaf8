#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access-level classification. Closed set: anything else coming from the
/// backend is an error condition, never a silently accepted third role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Administrador,
    Professor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Administrador, Role::Professor];

    /// Wire name as transmitted by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrador => "ADMINISTRADOR",
            Role::Professor => "PROFESSOR",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Human-readable label for layouts and badges.
    pub fn label(self) -> &'static str {
        match self {
            Role::Administrador => "Administrador",
            Role::Professor => "Professor",
        }
    }
}

/// Professor or administrator account as returned by the user boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub login: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola: Option<String>,
}

impl User {
    /// Display name for tables: the registered name, falling back to login.
    pub fn display_name(&self) -> &str {
        self.nome.as_deref().unwrap_or(&self.login)
    }
}

/// Project lifecycle. Declaration order is the lifecycle order, so the
/// derived `Ord` sorts tables from newly submitted to finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    AguardandoAnalisePreliminar,
    EmAnalise,
    ProjetoRecusado,
    EmAndamento,
    Finalizado,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::AguardandoAnalisePreliminar,
        ProjectStatus::EmAnalise,
        ProjectStatus::ProjetoRecusado,
        ProjectStatus::EmAndamento,
        ProjectStatus::Finalizado,
    ];

    /// Wire name as transmitted by the project boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::AguardandoAnalisePreliminar => "AGUARDANDO_ANALISE_PRELIMINAR",
            ProjectStatus::EmAnalise => "EM_ANALISE",
            ProjectStatus::ProjetoRecusado => "PROJETO_RECUSADO",
            ProjectStatus::EmAndamento => "EM_ANDAMENTO",
            ProjectStatus::Finalizado => "FINALIZADO",
        }
    }

    /// Parse a wire name. Returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<ProjectStatus> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
    }

    /// Label shown in badges and filter dropdowns.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::AguardandoAnalisePreliminar => "Aguardando Análise",
            ProjectStatus::EmAnalise => "Em Análise",
            ProjectStatus::ProjetoRecusado => "Recusado",
            ProjectStatus::EmAndamento => "Em Andamento",
            ProjectStatus::Finalizado => "Finalizado",
        }
    }

    /// Modifier class for the status badge component.
    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::AguardandoAnalisePreliminar => "status-badge--aguardando",
            ProjectStatus::EmAnalise => "status-badge--analise",
            ProjectStatus::ProjetoRecusado => "status-badge--recusado",
            ProjectStatus::EmAndamento => "status-badge--andamento",
            ProjectStatus::Finalizado => "status-badge--finalizado",
        }
    }
}

/// Project record tracked through the review lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub nome: String,
    pub objetivo: String,
    /// ISO-8601 start date, as sent by the backend.
    pub data_inicio: String,
    pub escopo: String,
    pub publico_alvo: String,
    pub status: ProjectStatus,
    pub professor_id: String,
}

/// Payload for creating a project. Always submitted in
/// `AGUARDANDO_ANALISE_PRELIMINAR` by the requesting professor.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub nome: String,
    pub objetivo: String,
    pub data_inicio: String,
    pub escopo: String,
    pub publico_alvo: String,
    pub status: ProjectStatus,
    pub professor_id: String,
}

/// Student work-group. Held only in local state; there is no group
/// boundary on the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub nome: String,
    pub professor_coordenador: String,
    pub alunos: Vec<String>,
    pub disponivel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projeto_id: Option<String>,
}

/// Response of every auth-boundary call: the signed credential.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Login request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginCredentials {
    pub login: String,
    pub password: String,
}

/// Professor registration body, used by both the public self-registration
/// page and the admin-side registration screen (which omits nome/escola).
#[derive(Clone, Debug, Serialize)]
pub struct RegisterProfessor {
    pub login: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escola: Option<String>,
    pub role: Role,
}

/// Administrator registration body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterAdmin {
    pub login: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    pub role: Role,
}

/// Editable fields of a professor/administrator account.
#[derive(Clone, Debug, Serialize)]
pub struct UserUpdate {
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escola: Option<String>,
}
