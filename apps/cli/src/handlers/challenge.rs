use super::zone_names;
use anyhow::Result;
use dialecta::Session;
use dialecta::features::challenge::{Grade, Question, TextOutcome};
use std::time::Instant;
use tracing::warn;

const VARIABLE_SUFFIX: &str = ":variable";

/// Draws a question, replays `selections` as map clicks and grades them.
///
/// # Errors
/// Never fails; an unavailable question is reported inline.
pub fn run(session: &mut Session, feature: Option<&str>, selections: &[String]) -> Result<()> {
    let generated = match feature {
        Some(feature) => session.generate_feature_question(feature),
        None => session.generate_question(),
    };
    let question = match generated {
        Ok((question, _)) => question,
        Err(e) => {
            warn!(error = %e, "Challenge aborted");
            println!("No hay pregunta disponible.");
            return Ok(());
        },
    };
    println!("{}", question.prompt());
    if let Question::Text(text) = &question
        && let Some(hint) = &text.hint
    {
        println!("Pista: {hint}");
    }

    let window = session.engine().config().double_click_window();
    let mut now = Instant::now();
    for selection in selections {
        let (zone, double) = selection
            .strip_suffix(VARIABLE_SUFFIX)
            .map_or((selection.as_str(), false), |zone| (zone, true));

        let Some(unit) = session.atlas().expand(zone).into_iter().next() else {
            println!("Zona desconocida: {zone}");
            continue;
        };

        session.click(&unit, now);
        if double {
            session.click(&unit, now + window / 4);
        }
        now += window.saturating_mul(2);
        session.poll(now);
    }

    match session.check_answer() {
        Some((grade, _)) => print_grade(session, &grade),
        None => println!("No hay pregunta activa."),
    }
    Ok(())
}

fn print_grade(session: &Session, grade: &Grade) {
    let atlas = session.atlas();
    let name = |key: &String| zone_names(atlas, [key]);

    match grade {
        Grade::Feature(g) => {
            if g.correct {
                println!("¡Correcto! Has identificado todas las zonas.");
                return;
            }
            println!("Respuesta incorrecta");
            println!("✓ Respuestas correctas: {}", zone_names(atlas, g.present.correct.iter().chain(&g.present.missed)));
            if let Some(variable) = &g.variable {
                println!("~ Variables: {}", zone_names(atlas, variable.correct.iter().chain(&variable.missed)));
            }
            let wrong = g.wrong();
            if !wrong.is_empty() {
                println!("✗ Selecciones incorrectas: {}", zone_names(atlas, &wrong));
            }
        },
        Grade::Text(g) => match g.outcome {
            TextOutcome::Correct => println!("¡Correcto! Es {}.", name(&g.answer)),
            TextOutcome::Incorrect => println!("Respuesta incorrecta: era {}.", name(&g.answer)),
            TextOutcome::NoSelection => println!("Sin selección: era {}.", name(&g.answer)),
        },
    }
}
