use models::{CompanySize, FundingGuidanceInput, FundingGuidanceResult, FundingProgram};

/// Selects the programs a company of the given size may apply for.
///
/// Unknown sizes match nothing. `industry` and `purpose` do not take part in
/// the selection.
pub fn funding_guidance(
    input: &FundingGuidanceInput,
    catalog: &[FundingProgram],
) -> FundingGuidanceResult {
    tracing::debug!(
        company_size = %input.company_size,
        industry = %input.industry,
        purpose = %input.purpose,
        "matching funding programs"
    );

    let recommended_programs: Vec<FundingProgram> = match CompanySize::from_str(&input.company_size) {
        Some(size) => catalog
            .iter()
            .filter(|program| qualifies(size, program))
            .cloned()
            .collect(),
        None => vec![],
    };

    FundingGuidanceResult {
        total_programs: recommended_programs.len(),
        recommended_programs,
    }
}

fn qualifies(size: CompanySize, program: &FundingProgram) -> bool {
    match size.max_program_amount() {
        Some(cap) => program.max_amount <= cap,
        None => true,
    }
}
