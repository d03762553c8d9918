//! Operation outcome counters.

// self
use crate::obs::{Operation, OperationOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_outcome(operation: Operation, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"salesforce_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records success or failure for a finished operation.
pub fn record_result<T, E>(operation: Operation, result: &Result<T, E>) {
	match result {
		Ok(_) => record_outcome(operation, OperationOutcome::Success),
		Err(_) => record_outcome(operation, OperationOutcome::Failure),
	}
}
