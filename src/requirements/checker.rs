//! Check aggregation.
//!
//! The `CheckRunner` runs a fixed, ordered set of probes exactly once each
//! and folds their results into a single verdict. It never stops early:
//! a failing check is still followed by every remaining check so the
//! report shows the whole picture.

use std::rc::Rc;

use serde::Serialize;

use super::macos::MacOsVersionProbe;
use super::metal::MetalToolchainProbe;
use super::probe::CapabilityProbe;
use super::status::CheckResult;
use super::xcode::XcodeVersionProbe;
use crate::config::{Overrides, Requirements};
use crate::shell::CommandRunner;

/// Ordered results of one run plus the overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    all_passed: bool,
    checks: Vec<CheckResult>,
}

impl CheckReport {
    /// Build a report, computing the verdict from `checks`.
    pub fn new(checks: Vec<CheckResult>) -> Self {
        let all_passed = checks.iter().all(CheckResult::passed);
        Self { all_passed, checks }
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    /// Results in execution order.
    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    /// Process exit code for this verdict: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed {
            0
        } else {
            1
        }
    }
}

/// Runs probes in order and aggregates their results.
pub struct CheckRunner {
    probes: Vec<Box<dyn CapabilityProbe>>,
}

impl CheckRunner {
    /// Create a runner over an explicit probe list.
    pub fn new(probes: Vec<Box<dyn CapabilityProbe>>) -> Self {
        Self { probes }
    }

    /// The standard check set: macOS version, Xcode version, Metal toolchain.
    pub fn standard(
        requirements: Requirements,
        overrides: Overrides,
        runner: Rc<dyn CommandRunner>,
    ) -> Self {
        let Overrides {
            macos_version,
            xcode_version,
            metal_available,
        } = overrides;

        Self::new(vec![
            Box::new(MacOsVersionProbe::new(
                requirements.macos,
                macos_version,
                Rc::clone(&runner),
            )),
            Box::new(XcodeVersionProbe::new(
                requirements.xcode,
                xcode_version,
                Rc::clone(&runner),
            )),
            Box::new(MetalToolchainProbe::new(metal_available, runner)),
        ])
    }

    /// Names of the configured checks, in order.
    pub fn check_names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Run every probe once, in order.
    pub fn run(&self) -> CheckReport {
        let results = self
            .probes
            .iter()
            .map(|probe| {
                tracing::debug!("Checking {}", probe.name());
                let result = probe.probe();
                tracing::debug!(
                    "{}: {}",
                    result.name(),
                    if result.passed() { "pass" } else { "fail" }
                );
                result
            })
            .collect();

        let report = CheckReport::new(results);
        tracing::debug!("All checks passed: {}", report.all_passed());
        report
    }
}
