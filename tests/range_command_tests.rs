use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*};

#[cfg(test)]
mod range_command_tests {
    use super::*;

    #[test]
    fn test_range_middle_page() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "--current", "5", "--total", "10"])
            .assert()
            .success()
            .stdout(assertions::has_pager())
            .stdout(predicate::str::contains("1 ... 4 [5] 6 ... 10"));

        Ok(())
    }

    #[test]
    fn test_range_first_page() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "-c", "1", "-t", "10"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[1] 2 ... 10"));

        Ok(())
    }

    #[test]
    fn test_range_json_output() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "--current", "10", "--total", "10", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"{"current_page":10,"total_pages":10,"window":[1,"...",9,10]}"#,
            ));

        Ok(())
    }

    #[test]
    fn test_range_clamps_out_of_range_page() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "--current", "99", "--total", "10", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""current_page":10"#));

        Ok(())
    }

    #[test]
    fn test_range_single_page_needs_no_pager() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "--total", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No pager needed"))
            .stdout(assertions::has_pager().not());

        Ok(())
    }

    #[test]
    fn test_range_few_pages_shows_all() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "--current", "3", "--total", "5", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""window":[1,2,3,4,5]"#));

        Ok(())
    }

    #[test]
    fn test_range_custom_side_window() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args([
                "range",
                "--current",
                "10",
                "--total",
                "20",
                "--max-buttons",
                "9",
                "--side",
                "2",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("1 ... 8 9 [10] 11 12 ... 20"));

        Ok(())
    }

    #[test]
    fn test_range_rejects_even_max_buttons() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?
            .args(["range", "--total", "10", "--max-buttons", "6"])
            .assert()
            .failure()
            .stderr(assertions::has_error("Invalid max buttons: 6"));

        Ok(())
    }

    #[test]
    fn test_range_uses_saved_config() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        env.write_config(r#"{ "max_buttons": 11, "side_buttons": 1, "items_per_page": 6 }"#)?;

        // 10 pages fit within 11 buttons, so nothing is elided
        env.cmd()?
            .args(["range", "--current", "5", "--total", "10", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#""window":[1,2,3,4,5,6,7,8,9,10]"#,
            ));

        Ok(())
    }

    #[test]
    fn test_range_requires_total() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()?.args(["range", "--current", "2"]).assert().failure();

        Ok(())
    }
}
