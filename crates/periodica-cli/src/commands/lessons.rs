use crate::cli::QuizArgs;
use crate::commands::load_lessons;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use periodica::workflows::lesson::LessonSession;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub fn run_list(config: &AppConfig) -> Result<()> {
    let library = load_lessons(config)?;
    println!("{}", ui::lessons_table(&library));
    Ok(())
}

pub fn run_quiz(args: QuizArgs, config: &AppConfig) -> Result<()> {
    let library = load_lessons(config)?;
    let lesson = library.get(&args.lesson).ok_or_else(|| {
        let available: Vec<&str> = library.iter().map(|lesson| lesson.id.as_str()).collect();
        CliError::Argument(format!(
            "Unknown lesson '{}'. Available lessons: {}",
            args.lesson,
            available.join(", ")
        ))
    })?;

    let mut session = match config.navigation {
        Some(policy) => LessonSession::with_policy(lesson, policy)?,
        None => LessonSession::new(lesson)?,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    take_lesson(&mut session, stdin.lock(), stdout.lock(), args.skip_reading)?;
    Ok(())
}

/// Walks a learner through the lesson sections, then asks every question and
/// prints the graded attempt. Returns the score.
pub fn take_lesson<R: BufRead, W: Write>(
    session: &mut LessonSession<'_>,
    mut input: R,
    mut output: W,
    skip_reading: bool,
) -> Result<usize> {
    let lesson = session.lesson();
    writeln!(output, "== {} ==", lesson.title)?;

    if !skip_reading {
        loop {
            let navigator = session.navigator();
            let section = session.current_section();
            writeln!(
                output,
                "\n[{}/{}] {}\n\n{}",
                navigator.active() + 1,
                navigator.len(),
                section.title,
                section.body.trim_end()
            )?;
            if navigator.is_last() {
                break;
            }
            write!(output, "\nPress Enter to continue...")?;
            output.flush()?;
            read_line(&mut input)?;
            session.navigator_mut().next();
        }
    }

    if lesson.questions.is_empty() {
        writeln!(output, "\nThis lesson has no quiz.")?;
        return Ok(0);
    }

    for (number, question) in lesson.questions.iter().enumerate() {
        writeln!(output, "\nQ{}. {}", number + 1, question.prompt)?;
        for (index, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", index + 1, option)?;
        }
        let choice = prompt_choice(&mut input, &mut output, question.options.len())?;
        session
            .quiz_mut()
            .select_answer(&question.id, question.options[choice].clone())?;
    }

    let score = session.quiz_mut().submit()?;
    let missed: Vec<String> = session
        .quiz()
        .results()
        .iter()
        .filter(|result| !result.is_correct)
        .map(|result| result.question_id.to_string())
        .collect();
    for question_id in &missed {
        session.quiz_mut().toggle_explanation(question_id)?;
    }
    info!(
        "Lesson '{}' quiz submitted with score {}/{}.",
        lesson.id,
        score,
        lesson.questions.len()
    );

    writeln!(output, "\nScore: {}/{}", score, lesson.questions.len())?;
    writeln!(output, "{}", ui::quiz_results_table(&session.quiz().results()))?;
    Ok(score)
}

fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> Result<usize> {
    loop {
        write!(output, "Your answer [1-{}]: ", count)?;
        output.flush()?;
        let line = read_line(input)?;
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(choice - 1),
            _ => {
                debug!("Rejected quiz input '{}'.", line.trim());
                writeln!(output, "Please enter a number between 1 and {}.", count)?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::Argument(
            "Input ended before the lesson was finished.".to_string(),
        ));
    }
    Ok(line)
}
