use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_only_the_closed_set() {
    assert_eq!(Role::parse("ADMINISTRADOR"), Some(Role::Administrador));
    assert_eq!(Role::parse("PROFESSOR"), Some(Role::Professor));
    assert_eq!(Role::parse("ALUNO"), None);
    assert_eq!(Role::parse("professor"), None);
}

#[test]
fn role_serializes_to_wire_names() {
    assert_eq!(
        serde_json::to_value(Role::Professor).expect("json"),
        serde_json::json!("PROFESSOR")
    );
    assert_eq!(
        serde_json::to_value(Role::Administrador).expect("json"),
        serde_json::json!("ADMINISTRADOR")
    );
}

// =============================================================
// ProjectStatus
// =============================================================

#[test]
fn status_wire_names_round_trip_through_parse() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ProjectStatus::parse("INEXISTENTE"), None);
}

#[test]
fn status_serde_matches_as_str() {
    for status in ProjectStatus::ALL {
        assert_eq!(
            serde_json::to_value(status).expect("json"),
            serde_json::json!(status.as_str())
        );
    }
}

#[test]
fn status_ordering_follows_the_lifecycle() {
    assert!(ProjectStatus::AguardandoAnalisePreliminar < ProjectStatus::EmAnalise);
    assert!(ProjectStatus::EmAnalise < ProjectStatus::ProjetoRecusado);
    assert!(ProjectStatus::EmAndamento < ProjectStatus::Finalizado);
}

// =============================================================
// Project wire format
// =============================================================

#[test]
fn project_deserializes_camel_case_fields() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "nome": "Horta Comunitária",
        "objetivo": "Cultivar alimentos",
        "dataInicio": "2025-03-01T00:00:00Z",
        "escopo": "Escola inteira",
        "publicoAlvo": "Turmas do 6º ano",
        "status": "EM_ANALISE",
        "professorId": "u-1"
    }))
    .expect("project");

    assert_eq!(project.data_inicio, "2025-03-01T00:00:00Z");
    assert_eq!(project.publico_alvo, "Turmas do 6º ano");
    assert_eq!(project.status, ProjectStatus::EmAnalise);
    assert_eq!(project.professor_id, "u-1");
}

#[test]
fn new_project_serializes_camel_case_fields() {
    let payload = serde_json::to_value(NewProject {
        nome: "Horta".to_owned(),
        objetivo: "Cultivar".to_owned(),
        data_inicio: "2025-03-01T00:00:00Z".to_owned(),
        escopo: "Escola".to_owned(),
        publico_alvo: "Alunos".to_owned(),
        status: ProjectStatus::AguardandoAnalisePreliminar,
        professor_id: "u-1".to_owned(),
    })
    .expect("json");

    assert_eq!(payload["dataInicio"], "2025-03-01T00:00:00Z");
    assert_eq!(payload["publicoAlvo"], "Alunos");
    assert_eq!(payload["professorId"], "u-1");
    assert_eq!(payload["status"], "AGUARDANDO_ANALISE_PRELIMINAR");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_display_name_falls_back_to_login() {
    let with_name = User {
        id: "u-1".to_owned(),
        login: "joao".to_owned(),
        role: Role::Professor,
        nome: Some("Prof. João Silva".to_owned()),
        escola: None,
    };
    let without_name = User {
        nome: None,
        ..with_name.clone()
    };
    assert_eq!(with_name.display_name(), "Prof. João Silva");
    assert_eq!(without_name.display_name(), "joao");
}

#[test]
fn register_professor_omits_absent_optional_fields() {
    let payload = serde_json::to_value(RegisterProfessor {
        login: "prof@escola.br".to_owned(),
        password: "segredo".to_owned(),
        nome: None,
        escola: None,
        role: Role::Professor,
    })
    .expect("json");

    assert_eq!(payload["role"], "PROFESSOR");
    assert!(payload.get("nome").is_none());
    assert!(payload.get("escola").is_none());
}
