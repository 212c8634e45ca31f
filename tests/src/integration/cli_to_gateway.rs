//! # Operator CLI → SMS Gateway
//!
//! ## Flow Tested:
//!
//! 1. **rw-wheel session**: fields given as flags or typed at the prompt
//! 2. **SMS webhook**: the printed code is posted as the `Body` form field
//! 3. **TwiML reply**: the decoded fields come back to the sender
//!
//! Codes hit by the ascending start index tie-break decode to a different
//! report; those are checked as a separate flow.

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use rw_01_wheel_codec::{
        decode, ConditionType, EncodedReport, WheelService, CASE_COUNT_RANGE, DAY_RANGE,
        MAX_START_INDEX,
    };
    use rw_02_sms_gateway::{build_router, AppState, GatewayMetrics};
    use rw_wheel::{run, Args, Prompter};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Run a CLI session with scripted stdin, returning the report and output
    fn cli_session(args: Args, start_index: usize, stdin: &str) -> (EncodedReport, String) {
        let mut prompter = Prompter::new(Cursor::new(stdin.as_bytes().to_vec()), Vec::new());
        let report = run(&args, start_index, &mut prompter).expect("session should succeed");
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (report, output)
    }

    fn flags(day: u32, condition: ConditionType, cases: u32) -> Args {
        Args {
            day: Some(day.to_string()),
            condition: Some(condition.mnemonic().to_string()),
            cases: Some(cases.to_string()),
            ..Args::default()
        }
    }

    fn gateway() -> (axum::Router, Arc<GatewayMetrics>) {
        let state = AppState::new(Arc::new(WheelService::random()));
        let metrics = Arc::clone(&state.metrics);
        (build_router(state, Duration::from_secs(5), 16 * 1024), metrics)
    }

    /// POST a code to the webhook and return the TwiML body
    async fn text_gateway(router: &axum::Router, code: &str) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/sms")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("Body={code}&From=%2B15550100")))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn decoded_reply(day: u32, condition: ConditionType, cases: u32) -> String {
        format!(
            "dayOfMonth={day}\ndisease={}\nnumberOfCases={cases}",
            condition.name()
        )
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[tokio::test]
    async fn test_flagged_report_round_trips_through_gateway() {
        let (router, metrics) = gateway();
        let (report, output) = cli_session(flags(5, ConditionType::Malaria, 4), 3, "");

        assert!(output.contains("Please text 035033052 to your reporting number"));

        let reply = text_gateway(&router, report.message.as_str()).await;
        assert!(reply.contains(&decoded_reply(5, ConditionType::Malaria, 4)));
        assert!(reply.contains("Thank you for your report!"));
        assert_eq!(metrics.snapshot().decoded, 1);
    }

    #[tokio::test]
    async fn test_prompted_report_round_trips_through_gateway() {
        let (router, _) = gateway();

        // bad day, bad condition, bad cases, each fixed on the second try
        let (report, output) = cli_session(Args::default(), 0, "40\n14\nq\nh\n0\n6\n");
        assert!(output.contains("Missing/invalid day provided (1-31 required)"));
        assert!(output.contains("Missing/invalid condition code provided"));
        assert!(output.contains("Missing/invalid cases metric provided (1-20 required)"));

        let reply = text_gateway(&router, report.message.as_str()).await;
        assert!(reply.contains(&decoded_reply(14, ConditionType::Hepatitis, 6)));
    }

    #[tokio::test]
    async fn test_every_start_index_reaches_gateway() {
        let (router, metrics) = gateway();

        for start in 0..=MAX_START_INDEX {
            let (report, _) = cli_session(flags(31, ConditionType::Covid19, 20), start, "");
            let reply = text_gateway(&router, report.message.as_str()).await;
            assert!(
                reply.contains(&decoded_reply(31, ConditionType::Covid19, 20)),
                "start index {start} did not round trip"
            );
        }

        assert_eq!(metrics.snapshot().decoded as usize, MAX_START_INDEX + 1);
    }

    #[tokio::test]
    async fn test_gateway_reply_matches_direct_decode_for_all_reports() {
        let (router, _) = gateway();

        // start 0 is always unambiguous, so a sweep there must be exact
        for day in [*DAY_RANGE.start(), 16, *DAY_RANGE.end()] {
            for condition in ConditionType::ALL {
                for cases in [*CASE_COUNT_RANGE.start(), *CASE_COUNT_RANGE.end()] {
                    let (report, _) = cli_session(flags(day, condition, cases), 0, "");
                    let reply = text_gateway(&router, report.message.as_str()).await;
                    assert!(reply.contains(&decoded_reply(day, condition, cases)));
                }
            }
        }
    }

    #[tokio::test]
    async fn test_tie_break_collision_is_reported_consistently() {
        let (router, _) = gateway();

        // start 1 yields the same digits as start 0 does for day 3, Typhoid, 7 cases
        let (report, _) = cli_session(flags(2, ConditionType::Malaria, 5), 1, "");
        assert_eq!(report.message.as_str(), "006015035");

        let direct = decode(report.message.as_str()).unwrap();
        assert_eq!(direct.day_of_month, 3);
        assert_eq!(direct.condition, ConditionType::Typhoid);
        assert_eq!(direct.case_count, 7);

        let reply = text_gateway(&router, report.message.as_str()).await;
        assert!(reply.contains(&decoded_reply(3, ConditionType::Typhoid, 7)));
    }

    #[tokio::test]
    async fn test_mistyped_code_is_rejected_by_gateway() {
        let (router, metrics) = gateway();
        let (report, _) = cli_session(flags(9, ConditionType::Dengue, 12), 4, "");

        // drop the last digit as a sender might
        let truncated = &report.message.as_str()[..8];
        let reply = text_gateway(&router, truncated).await;

        assert!(reply.contains("Oops! Your message does not appear to be valid."));
        assert_eq!(metrics.snapshot().rejected, 1);
    }
}
