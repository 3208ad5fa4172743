//! Property tests for the lifecycle engine over mock collaborators.
#![allow(clippy::unwrap_used)] // Test code

use account_service_core::providers::AccountRepository;
use account_service_core::{AccountError, AccountLifecycle, AccountStatus, LifecyclePolicy};
use account_service_testing::{fixtures, properties, test_environment};
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn create_persists_only_eligible_applicants(
        account_type in properties::account_type(),
        age in properties::age(),
        salary in properties::money(),
    ) {
        let policy = LifecyclePolicy::default();
        let eligible = age >= policy.min_applicant_age && salary >= policy.min_salary;

        let env = test_environment();
        env.users.add_user(fixtures::user(1));
        let lifecycle = AccountLifecycle::new(env, policy);

        let mut request = fixtures::eligible_request(1, account_type);
        request.age = age;
        request.salary = salary;

        let result = runtime().block_on(lifecycle.create_account(request));

        prop_assert_eq!(result.is_ok(), eligible);
        if let Err(error) = result {
            prop_assert!(matches!(error, AccountError::IneligibleApplicant));
        }
        let writes = lifecycle.environment().accounts.writes();
        prop_assert_eq!(writes, u64::from(eligible));
    }

    #[test]
    fn rejected_status_change_leaves_record_untouched(
        from in properties::account_status(),
        to in properties::account_status(),
        balance in properties::money(),
    ) {
        let env = test_environment();
        let lifecycle = AccountLifecycle::new(env, LifecyclePolicy::default());
        let rt = runtime();

        let before = rt
            .block_on(
                lifecycle
                    .environment()
                    .accounts
                    .seed(fixtures::account(1, 1, from, balance)),
            )
            .unwrap();
        let number = before.account_number.to_string();

        let result = rt.block_on(lifecycle.update_status(&number, to));
        let after = rt
            .block_on(lifecycle.environment().accounts.find_by_account_number(&number))
            .unwrap()
            .unwrap();

        if result.is_ok() {
            prop_assert_eq!(from, AccountStatus::Pending);
            prop_assert_eq!(to, AccountStatus::Active);
            prop_assert_eq!(after.account_status, AccountStatus::Active);
            prop_assert_eq!(after.version, before.version + 1);
        } else {
            prop_assert_eq!(after, before);
            prop_assert_eq!(lifecycle.environment().accounts.writes(), 0);
        }
    }
}
