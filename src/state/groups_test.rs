use super::*;

// =============================================================
// demo roster
// =============================================================

#[test]
fn demo_roster_has_three_groups() {
    let roster = demo_roster();
    assert_eq!(roster.len(), 3);
    assert!(roster[0].disponivel);
    assert!(!roster[2].disponivel);
    assert_eq!(roster[1].projeto_id.as_deref(), Some("p-123"));
}

// =============================================================
// mutations
// =============================================================

#[test]
fn create_appends_an_empty_group() {
    let mut roster = demo_roster();
    let id = create(&mut roster, "  Grupo D  ", "Prof. Nova", true);
    let group = roster.last().expect("created group");
    assert_eq!(group.id, id);
    assert_eq!(group.nome, "Grupo D");
    assert_eq!(group.professor_coordenador, "Prof. Nova");
    assert!(group.alunos.is_empty());
    assert!(group.projeto_id.is_none());
}

#[test]
fn created_ids_are_unique() {
    let mut roster = Vec::new();
    let first = create(&mut roster, "A", "C", true);
    let second = create(&mut roster, "B", "C", true);
    assert_ne!(first, second);
}

#[test]
fn toggle_availability_flips_the_flag() {
    let mut roster = demo_roster();
    toggle_availability(&mut roster, "g-1");
    assert!(!roster[0].disponivel);
    toggle_availability(&mut roster, "g-1");
    assert!(roster[0].disponivel);
}

#[test]
fn toggle_availability_ignores_unknown_ids() {
    let mut roster = demo_roster();
    let before = roster.clone();
    toggle_availability(&mut roster, "g-404");
    assert_eq!(roster, before);
}

#[test]
fn add_student_appends_trimmed_name() {
    let mut roster = demo_roster();
    add_student(&mut roster, "g-2", "  Rafael Pinto ");
    assert_eq!(roster[1].alunos.last().map(String::as_str), Some("Rafael Pinto"));
}

#[test]
fn remove_student_drops_by_index() {
    let mut roster = demo_roster();
    remove_student(&mut roster, "g-1", 1);
    assert_eq!(roster[0].alunos, ["Ana Maria", "Carla Oliveira"]);
}

#[test]
fn remove_student_ignores_out_of_range_index() {
    let mut roster = demo_roster();
    let before = roster.clone();
    remove_student(&mut roster, "g-1", 99);
    assert_eq!(roster, before);
}
