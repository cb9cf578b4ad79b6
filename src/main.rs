use anyhow::Context;
use clap::Parser;
use signup_form::cli::Cli;
use signup_form::config::Config;
use signup_form::form::{FormProps, FormValues, SignupForm};
use signup_form::logging::{init_tracing, LogTarget};
use signup_form::script::{load_script, replay};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let target = if cli.script.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File(cli.log_file(&config))
    };
    init_tracing(target)?;

    let initial_values = cli.initial_values(&config);
    let validation = cli.validation_policy(&config);

    match &cli.script {
        Some(path) => {
            let events = load_script(path)?;
            tracing::info!(events = events.len(), path = %path.display(), "replaying script");
            let props = FormProps::new(|values: FormValues| {
                write_submission(&mut io::stdout().lock(), &values)
            })
                .initial_values(initial_values)
                .validation(validation);
            let mut form = SignupForm::new(props);
            replay(&mut form, events);
            tracing::debug!(state = ?form.state(), "script finished");
            if cli.dump_state {
                println!("{}", serde_json::to_string(form.state())?);
            }
        }
        None => {
            let submissions = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&submissions);
            let props = FormProps::new(move |values: FormValues| sink.borrow_mut().push(values))
                .initial_values(initial_values)
                .validation(validation);
            let result = signup_form::ui::run(SignupForm::new(props));
            let form = finish_terminal_session(
                result,
                &submissions.borrow(),
                &mut io::stdout().lock(),
            )?;
            tracing::debug!(state = ?form.state(), "form unmounted");
        }
    }

    Ok(())
}

/// Write every collected submission, then surface any terminal failure.
fn finish_terminal_session(
    result: io::Result<SignupForm>,
    submissions: &[FormValues],
    out: &mut impl Write,
) -> anyhow::Result<SignupForm> {
    for values in submissions {
        write_submission(out, values);
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, submissions = submissions.len(), "terminal UI failed");
    }
    result.context("running terminal UI")
}

fn write_submission(out: &mut impl Write, values: &FormValues) {
    let line = match serde_json::to_string(values) {
        Ok(line) => line,
        Err(err) => {
            tracing::warn!(error = %err, "could not encode submission");
            return;
        }
    };
    if let Err(err) = writeln!(out, "{line}") {
        tracing::warn!(error = %err, "could not write submission");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submissions() -> Vec<FormValues> {
        vec![
            FormValues::new("Mark", "mark@email.com", "Password1"),
            FormValues::new("Ann", "ann@email.com", "secret"),
        ]
    }

    #[test]
    fn submissions_are_written_when_terminal_fails() {
        let mut out = Vec::new();
        let failed = Err(io::Error::other("terminal gone"));

        let err = finish_terminal_session(failed, &submissions(), &mut out).unwrap_err();

        assert!(format!("{err:#}").contains("terminal gone"));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with(r#"{"name":"Mark","#));
    }

    #[test]
    fn submissions_are_written_after_clean_exit() {
        let mut out = Vec::new();
        let form = SignupForm::new(FormProps::new(|_: FormValues| {}));

        let form = finish_terminal_session(Ok(form), &submissions()[..1], &mut out).unwrap();

        assert_eq!(form.value(signup_form::form::Field::Name), "");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"name\":\"Mark\",\"email\":\"mark@email.com\",\"password\":\"Password1\"}\n"
        );
    }
}
