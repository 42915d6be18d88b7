use anyhow::Result;
use dialecta::Session;
use dialecta::features::challenge::QuizAnswer;

/// # Errors
/// Never fails; an empty bank is reported inline.
pub fn run(session: &mut Session, answer: Option<usize>) -> Result<()> {
    let Some(quiz) = session.draw_quiz() else {
        println!("No hay preguntas de cuestionario.");
        return Ok(());
    };

    println!("{}", quiz.prompt);
    for (i, option) in quiz.options.iter().enumerate() {
        println!("  [{i}] {option}");
    }
    let explanation = quiz.explanation.clone();

    let Some(choice) = answer else {
        return Ok(());
    };
    match session.answer_quiz(choice) {
        Some(QuizAnswer::Correct) => println!("¡Correcto!"),
        Some(QuizAnswer::Incorrect { expected }) => println!("Incorrecto: la respuesta era [{expected}]."),
        Some(QuizAnswer::OutOfRange) => println!("Opción fuera de rango: {choice}"),
        None => {},
    }
    if let Some(explanation) = explanation {
        println!("{explanation}");
    }
    Ok(())
}
