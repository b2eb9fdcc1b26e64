//! End-to-end tests for the input controller and dispatcher.

#[cfg(test)]
mod tests {
    use crate::commands::content;
    use crate::output::{OutputLine, Prompt};
    use crate::session::{Dispatch, Session, HISTORY_CAPACITY};

    fn type_str(session: &mut Session, s: &str) {
        for c in s.chars() {
            session.insert_char(c);
        }
    }

    fn submit(session: &mut Session, s: &str) -> Dispatch {
        type_str(session, s);
        session.submit()
    }

    fn rendered(session: &Session) -> Vec<String> {
        session
            .output()
            .lines()
            .iter()
            .map(|l| l.plain_text(session.prompt()))
            .collect()
    }

    #[test]
    fn test_unknown_command_appends_single_diagnostic() {
        let mut session = Session::default();
        submit(&mut session, "about");
        let before = session.output().lines().to_vec();

        assert_eq!(submit(&mut session, "sudo rm -rf /"), Dispatch::NotFound);

        let lines = session.output().lines();
        assert_eq!(&lines[..before.len()], &before[..]);
        assert_eq!(
            &lines[before.len()..],
            &[
                OutputLine::echo("sudo rm -rf /"),
                OutputLine::text("Command not found: sudo rm -rf /"),
            ]
        );
    }

    #[test]
    fn test_about_prints_synchronously() {
        let mut session = Session::default();
        assert_eq!(submit(&mut session, "about"), Dispatch::Printed);

        let text = rendered(&session);
        assert_eq!(text[0], "visitor@terminal.prashant.dev:-$ about");
        assert_eq!(text.len(), 1 + content::ABOUT.len());
        assert!(text[2].starts_with("Adaptable and articulate Engineer"));
        assert!(!text.iter().any(|l| l.starts_with("Command not found")));
    }

    #[test]
    fn test_resolution_ignores_case_but_echo_keeps_it() {
        let mut session = Session::default();
        assert_eq!(submit(&mut session, "HeLp"), Dispatch::Printed);
        assert_eq!(session.output().lines()[0], OutputLine::echo("HeLp"));

        assert_eq!(submit(&mut session, "ANT -AB"), Dispatch::Printed);
    }

    #[test]
    fn test_experience_echoes_then_reveals() {
        let mut session = Session::default();
        let outcome = submit(&mut session, "experience");

        let Dispatch::Reveal(seq) = outcome else {
            panic!("experience should be revealed, got {:?}", outcome);
        };
        assert_eq!(session.output().lines(), &[OutputLine::echo("experience")]);
        assert_eq!(seq.len(), content::EXPERIENCE.len());

        for (i, line) in seq.enumerate() {
            session.output_mut().scroll_up(7);
            session.reveal_line(line);
            assert_eq!(session.output().len(), i + 2);
            assert_eq!(session.output().scroll_back(), 0);
        }
        assert!(rendered(&session)[2].contains("Experience"));
    }

    #[test]
    fn test_every_long_command_is_animated() {
        for cmd in [
            "experience",
            "education",
            "technical skills",
            "licenses & certifications",
            "awards and achievements",
            "projects",
            "volunteering",
            "publications",
            "hobbies",
            "contacts",
            "ant -co",
        ] {
            let mut session = Session::default();
            assert!(
                matches!(submit(&mut session, cmd), Dispatch::Reveal(_)),
                "{} should be animated",
                cmd
            );
            assert_eq!(session.output().len(), 1);
        }
    }

    #[test]
    fn test_clear_empties_without_echo() {
        let mut session = Session::default();
        submit(&mut session, "about");
        submit(&mut session, "nope");
        assert!(!session.output().is_empty());

        assert_eq!(submit(&mut session, "clear"), Dispatch::Cleared);
        assert!(session.output().is_empty());
        assert_eq!(session.history().entries().next(), Some("clear"));
    }

    #[test]
    fn test_clear_is_case_sensitive() {
        let mut session = Session::default();
        assert_eq!(submit(&mut session, "Clear"), Dispatch::NotFound);
        assert_eq!(rendered(&session)[1], "Command not found: Clear");
    }

    #[test]
    fn test_late_reveal_lines_land_after_clear() {
        let mut session = Session::default();
        let Dispatch::Reveal(mut seq) = submit(&mut session, "hobbies") else {
            panic!("hobbies should be revealed");
        };
        session.reveal_line(seq.next().unwrap_or_else(|| OutputLine::text("")));
        submit(&mut session, "clear");
        for line in seq {
            session.reveal_line(line);
        }
        assert_eq!(session.output().len(), content::HOBBIES.len() - 1);
    }

    #[test]
    fn test_history_keeps_most_recent_twenty() {
        let mut session = Session::default();
        for i in 0..21 {
            submit(&mut session, &format!("cmd{}", i));
        }
        let entries: Vec<_> = session.history().entries().collect();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries[0], "cmd20");
        assert_eq!(entries[19], "cmd1");
    }

    #[test]
    fn test_arrow_up_walks_oldest_ward_without_overrun() {
        let mut session = Session::default();
        for cmd in ["about", "help", "hobbies"] {
            submit(&mut session, cmd);
        }
        session.history_older();
        assert_eq!(session.input().as_str(), "hobbies");
        session.history_older();
        assert_eq!(session.input().as_str(), "help");
        session.history_older();
        assert_eq!(session.input().as_str(), "about");
        for _ in 0..5 {
            session.history_older();
        }
        assert_eq!(session.input().as_str(), "about");
        assert_eq!(session.history().cursor(), Some(2));
    }

    #[test]
    fn test_arrow_down_blanks_once_then_noops() {
        let mut session = Session::default();
        submit(&mut session, "about");
        submit(&mut session, "help");

        session.history_older();
        session.history_older();
        session.history_newer();
        assert_eq!(session.input().as_str(), "help");
        session.history_newer();
        assert_eq!(session.input().as_str(), "");
        assert_eq!(session.history().cursor(), None);

        type_str(&mut session, "edu");
        session.history_newer();
        session.history_newer();
        assert_eq!(session.input().as_str(), "edu");
    }

    #[test]
    fn test_arrow_up_with_empty_history_is_noop() {
        let mut session = Session::default();
        type_str(&mut session, "ab");
        session.history_older();
        assert_eq!(session.input().as_str(), "ab");
    }

    #[test]
    fn test_submit_resets_history_cursor() {
        let mut session = Session::default();
        submit(&mut session, "about");
        session.history_older();
        assert_eq!(session.history().cursor(), Some(0));
        session.submit();
        assert_eq!(session.history().cursor(), None);
        assert_eq!(session.input().as_str(), "");
        assert_eq!(session.history().entries().collect::<Vec<_>>(), vec!["about", "about"]);
    }

    #[test]
    fn test_tab_completes_in_table_order() {
        let mut session = Session::default();
        type_str(&mut session, "ed");
        session.complete();
        assert_eq!(session.input().as_str(), "education");

        let mut session = Session::default();
        type_str(&mut session, "Te");
        session.complete();
        assert_eq!(session.input().as_str(), "technical skills");

        let mut session = Session::default();
        type_str(&mut session, "zz");
        session.complete();
        assert_eq!(session.input().as_str(), "zz");
    }

    #[test]
    fn test_ctrl_c_echoes_and_discards_input() {
        let mut session = Session::new(Prompt::new("guest", "box"));
        type_str(&mut session, "experi");
        session.interrupt();

        assert_eq!(rendered(&session), vec!["guest@box:-$ experi", "^C"]);
        assert!(session.input().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_empty_submit_is_not_found() {
        let mut session = Session::default();
        assert_eq!(session.submit(), Dispatch::NotFound);
        assert_eq!(rendered(&session)[1], "Command not found: ");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_typed_markup_stays_literal() {
        let mut session = Session::default();
        submit(&mut session, "<a href=x>hi</a>");
        assert_eq!(
            session.output().lines()[1],
            OutputLine::text("Command not found: <a href=x>hi</a>")
        );
    }
}
