//! Integration tests driving real shell commands through the scenario context

#[cfg(test)]
mod integration_tests {
    use crate::config::HarnessConfig;
    use crate::context::{RunOptions, ScenarioContext};
    use crate::error::HarnessError;
    use crate::system::{CommandExecutor, RunRequest, ShellCommandExecutor};

    fn live_context() -> ScenarioContext {
        ScenarioContext::from_config(HarnessConfig::default())
    }

    #[tokio::test]
    async fn test_shell_success_captures_both_streams() {
        let mut context = live_context();
        let result = context
            .run_in_context("echo out; echo err >&2", RunOptions::default())
            .await
            .unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "out\n");
        assert_eq!(result.stderr, "err\n");
    }

    #[tokio::test]
    async fn test_shell_failure_is_reported_with_exit_code() {
        let mut context = live_context();
        let err = context
            .run_in_context("exit 3", RunOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), Some(3));
        assert_eq!(context.state.last_result().unwrap().exit_code, 3);
    }

    #[tokio::test]
    async fn test_shell_tolerated_failure() {
        let mut context = live_context();
        let result = context
            .run_in_context("echo partial; exit 5", RunOptions::can_fail())
            .await
            .unwrap();
        assert_eq!(result.exit_code, 5);
        assert_eq!(result.stdout, "partial\n");
    }

    #[tokio::test]
    async fn test_shell_invalid_utf8_is_escaped() {
        let result = ShellCommandExecutor
            .execute(&RunRequest::new(r"printf 'a\377b'"))
            .await
            .unwrap();
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout_bytes, b"a\xffb");
        assert_eq!(result.stdout, "a\\xffb");
    }

    #[tokio::test]
    async fn test_shell_killed_by_signal_reports_negative_code() {
        let result = ShellCommandExecutor
            .execute(&RunRequest::new("kill -9 $$"))
            .await
            .unwrap();
        assert_eq!(result.exit_code, -9);
    }

    #[tokio::test]
    async fn test_scenario_working_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), b"").unwrap();
        let mut context = live_context().with_working_dir(dir.path());

        let result = context
            .run_in_context("ls", RunOptions::default())
            .await
            .unwrap();
        assert_eq!(result.stdout, "marker\n");

        let other = tempfile::tempdir().unwrap();
        let result = context
            .run_in_context("ls", RunOptions::default().in_dir(other.path()))
            .await
            .unwrap();
        assert_eq!(result.stdout, "");
    }

    #[tokio::test]
    async fn test_missing_working_dir_is_spawn_error() {
        let mut context = live_context().with_working_dir("/nonexistent/scenario/dir");
        let err = context
            .run_in_context("true", RunOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_locale_prefix_reaches_child() {
        let mut context = live_context();
        context.state.prefixes.set_lc_all("C");
        // The locale reaches the child process, not expansions of the outer shell
        let result = context
            .run_in_context("printenv LC_ALL", RunOptions::default())
            .await
            .unwrap();
        assert_eq!(result.stdout, "C\n");
    }

    /// Stand-in `faketime` that only adds its preload and runs the rest
    fn fake_faketime_dir() -> tempfile::TempDir {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("faketime");
        std::fs::write(
            &script,
            "#!/bin/sh\nshift\nexport LD_PRELOAD=\"libfaketime.so.1${LD_PRELOAD:+:$LD_PRELOAD}\"\nexec \"$@\"\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_all_layers_reach_child_together() {
        let bin = fake_faketime_dir();
        let path = format!(
            "{}:{}",
            bin.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut context = live_context();
        context.state.prefixes.set_faketime(
            chrono::NaiveDate::from_ymd_opt(2030, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        context
            .state
            .prefixes
            .set_kernel_release("5.14.0", std::path::Path::new("/nonexistent/fake_uname.so"));
        context.state.prefixes.set_lc_all("C");

        let result = context
            .run_in_context(
                r#"sh -c 'printf "%s|%s|%s|%s" "$LD_PRELOAD" "$FAKE_KERNEL_RELEASE" "$LC_ALL" "$NO_FAKE_STAT"'"#,
                RunOptions::default().with_env("PATH", &path),
            )
            .await
            .unwrap();
        assert_eq!(
            result.stdout,
            "/nonexistent/fake_uname.so:libfaketime.so.1|5.14.0|C|1"
        );
    }

    #[tokio::test]
    async fn test_extra_env_reaches_child() {
        let mut context = live_context();
        let result = context
            .run_in_context(
                "printf '%s' \"$PRODUCT_ID\"",
                RunOptions::default().with_env("PRODUCT_ID", "69"),
            )
            .await
            .unwrap();
        assert_eq!(result.stdout, "69");
    }
}
