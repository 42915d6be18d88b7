use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/linguistic_data.json");

fn dialecta() -> Command {
    let mut cmd = Command::cargo_bin("dialecta").expect("binary is built");
    cmd.env("DIALECTA__LOGGING__LEVEL", "warn").args(["--data", DATA]);
    cmd
}

#[test]
fn explore_prints_zone_profile() {
    dialecta()
        .args(["explore", "ES-CN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ES-CN (sur_espana) → Sur de España y Canarias"))
        .stdout(predicate::str::contains("ajuste local"));
}

#[test]
fn explore_unknown_unit_is_not_an_error() {
    dialecta()
        .args(["explore", "FR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no está incluida"));
}

#[test]
fn resolve_reports_overrides() {
    dialecta()
        .args(["resolve", "ES-CN", "seseo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seseo: Presente [ajuste local]"));

    dialecta()
        .args(["resolve", "PE", "seseo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seseo: Presente [zona]"));
}

#[test]
fn expand_includes_linked_zones() {
    dialecta()
        .args(["expand", "caribe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CO-ATL"))
        .stdout(predicate::str::contains("VE"));
}

#[test]
fn filter_lists_classes() {
    dialecta()
        .args(["filter", "seseo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rasgo: Seseo"))
        .stdout(predicate::str::contains("Sin datos: Guineoecuatoriano"))
        .stdout(predicate::str::contains("ES-CN"));
}

#[test]
fn presence_challenge_grades_selections() {
    dialecta()
        .args(["challenge", "--seed", "7", "--feature", "lambdacismo", "--select", "caribe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("¡Correcto!"));

    dialecta()
        .args(["challenge", "--seed", "7", "--feature", "lambdacismo", "--select", "andino"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Respuesta incorrecta"))
        .stdout(predicate::str::contains("✓ Respuestas correctas: Caribe"))
        .stdout(predicate::str::contains("✗ Selecciones incorrectas: Andino"));
}

#[test]
fn variable_challenge_uses_double_clicks() {
    dialecta()
        .args([
            "challenge",
            "--seed",
            "7",
            "--variable",
            "--feature",
            "lambdacismo",
            "--select",
            "caribe",
            "--select",
            "sur_espana:variable",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("doble clic"))
        .stdout(predicate::str::contains("¡Correcto!"));
}

#[test]
fn text_challenge_without_selection() {
    dialecta()
        .args(["challenge", "--seed", "3", "--kinds", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("¿De qué zona es este texto?"))
        .stdout(predicate::str::contains("Sin selección"));
}

#[test]
fn unknown_question_kind_is_rejected() {
    dialecta()
        .args(["challenge", "--kinds", "txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown challenge kind 'txt'"));
}

#[test]
fn quiz_lists_options() {
    dialecta()
        .args(["quiz", "--seed", "5", "--answer", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0]"))
        .stdout(predicate::str::contains("Opción fuera de rango: 9"));
}

#[test]
fn missing_data_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("dialecta")
        .expect("binary is built")
        .args(["--data", &dir.path().join("missing.json").display().to_string(), "expand", "andino"])
        .assert()
        .failure();
}

#[test]
fn config_file_sets_grading() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dialecta.toml");
    fs::write(&path, "[challenge]\ngrading = \"presence_and_variable\"\n\n[logging]\nlevel = \"error\"\n")
        .expect("config is written");

    dialecta()
        .args(["--config", &path.display().to_string()])
        .args(["challenge", "--feature", "lambdacismo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doble clic"));
}
