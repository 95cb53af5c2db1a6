use serde::{Deserialize, Serialize};

pub mod number_serde;

// Settings models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CovenantThresholds {
	pub max_debt_to_ebitda: f64,
	pub min_current_ratio: f64,
	pub max_debt_to_equity: f64,
}

impl Default for CovenantThresholds {
	fn default() -> Self {
		Self {
			max_debt_to_ebitda: 3.0,
			min_current_ratio: 1.2,
			max_debt_to_equity: 2.0,
		}
	}
}

/// Calculator settings read from `settings.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub covenant_thresholds: CovenantThresholds,
	pub funding_programs: Vec<FundingProgram>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			covenant_thresholds: CovenantThresholds::default(),
			funding_programs: FundingProgram::default_catalog(),
		}
	}
}

// Debt brake
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebtBrakeInput {
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtBrakeResult {
	pub debt_limit: f64,
	pub revenue: f64,
	pub percentage: f64,
}

// Cost analysis
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostAnalysisInput {
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub principal: f64,
	/// Annual rate in percent.
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub interest_rate: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub term_years: f64,
	/// Tax rate in percent.
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub tax_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostAnalysisResult {
	pub monthly_payment: f64,
	pub total_payment: f64,
	pub total_interest: f64,
	pub after_tax_interest: f64,
	pub after_tax_cost: f64,
	pub effective_rate: f64,
}

// Debt snowball
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Debt {
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub principal: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub interest_rate: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub minimum_payment: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebtSnowballInput {
	#[serde(default)]
	pub debts: Vec<Debt>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizedDebt {
	pub debt_id: usize,
	pub principal: f64,
	pub interest_rate: f64,
	pub minimum_payment: f64,
	pub payoff_months: f64,
	pub priority: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtSnowballResult {
	pub prioritized_debts: Vec<PrioritizedDebt>,
	/// Always 0: no baseline payoff plan is computed to compare against.
	pub total_interest_saved: f64,
}

// Funding guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
	Small,
	Medium,
	Large,
}

impl CompanySize {
	/// Exact, case-sensitive match on the form values.
	pub fn from_str(s: &str) -> Option<Self> {
		match s {
			"small" => Some(Self::Small),
			"medium" => Some(Self::Medium),
			"large" => Some(Self::Large),
			_ => None,
		}
	}

	/// Largest program amount this size qualifies for; `None` means no cap.
	pub fn max_program_amount(&self) -> Option<u64> {
		match self {
			Self::Small => Some(500_000),
			Self::Medium => Some(2_000_000),
			Self::Large => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingProgram {
	pub name: String,
	pub description: String,
	pub max_amount: u64,
	pub interest_rate: f64,
	pub eligibility: String,
}

impl FundingProgram {
	fn new(name: &str, description: &str, max_amount: u64, interest_rate: f64, eligibility: &str) -> Self {
		Self {
			name: name.to_string(),
			description: description.to_string(),
			max_amount,
			interest_rate,
			eligibility: eligibility.to_string(),
		}
	}

	/// Sample programs for German SMEs.
	pub fn default_catalog() -> Vec<FundingProgram> {
		vec![
			FundingProgram::new(
				"KfW SME Loan",
				"Low-interest loans for small and medium enterprises",
				1_000_000,
				2.5,
				"SMEs with less than 250 employees",
			),
			FundingProgram::new(
				"EU Horizon Europe",
				"Innovation and research funding",
				5_000_000,
				0.0,
				"Innovation-focused companies",
			),
			FundingProgram::new(
				"Digital Innovation Fund",
				"Funding for digital transformation",
				500_000,
				1.5,
				"Companies implementing digital solutions",
			),
		]
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FundingGuidanceInput {
	#[serde(default)]
	pub company_size: String,
	// Reserved: not used for matching yet
	#[serde(default)]
	pub industry: String,
	#[serde(default)]
	pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingGuidanceResult {
	pub recommended_programs: Vec<FundingProgram>,
	pub total_programs: usize,
}

// Covenant tracking
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CovenantInput {
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub total_debt: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub ebitda: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub current_assets: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub current_liabilities: f64,
	#[serde(default, deserialize_with = "number_serde::deserialize")]
	pub net_worth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantCheck {
	pub value: f64,
	pub threshold: f64,
	pub compliant: bool,
	pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Covenants {
	pub debt_to_ebitda: CovenantCheck,
	pub current_ratio: CovenantCheck,
	pub debt_to_equity: CovenantCheck,
}

impl Covenants {
	pub fn all_compliant(&self) -> bool {
		self.debt_to_ebitda.compliant && self.current_ratio.compliant && self.debt_to_equity.compliant
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CovenantResult {
	pub covenants: Covenants,
	pub overall_compliant: bool,
}
