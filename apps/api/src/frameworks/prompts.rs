// Prompt construction for framework generation.
// The system instruction lives in llm_client::prompts.

use crate::frameworks::catalog::FrameworkProfile;
use crate::frameworks::models::GenerationRequest;

/// Element instructions used when a type key has no dedicated instruction.
pub const GENERIC_ELEMENT_INSTRUCTIONS: &str = "Create appropriate framework elements.";

/// How many elements to produce, and how they must relate, for each type key.
pub fn element_instructions(type_key: &str) -> &'static str {
    match type_key {
        "linear" => {
            "Create 3-8 sequential steps where each step unlocks the next. \
             Use action verbs and ensure clear causality."
        }
        "non_linear" => {
            "Create 4-9 independent pillars/principles that can be used in any order. \
             Ensure each pillar stands alone and provides value independently."
        }
        "cyclical" => {
            "Create 3-6 stages that form a continuous loop where the last stage feeds back \
             into the first. Show how each cycle improves upon the last."
        }
        "hierarchical" => {
            "Create 3-7 tiers where each higher level contains or supersedes the benefits \
             of lower levels. Show clear advancement path."
        }
        "matrix" => {
            "Create a 2x2 or larger grid with two independent axes. Define clear quadrants \
             with actionable labels and strategic implications."
        }
        _ => GENERIC_ELEMENT_INSTRUCTIONS,
    }
}

/// Builds the user prompt for one generation request. Deterministic; the caller
/// guarantees `profile` belongs to `request.kind`.
pub fn build_framework_prompt(request: &GenerationRequest, profile: &FrameworkProfile) -> String {
    let type_key = request.kind.key();
    let characteristics = profile.characteristics.join(", ");
    let instructions = element_instructions(type_key);

    format!(
        r#"Create a {type_name} framework for {industry} with the following specifications:

PURPOSE: {purpose}
TARGET AUDIENCE: {audience}
COMPLEXITY LEVEL: {complexity}

FRAMEWORK TYPE REQUIREMENTS:
- Type: {type_name}
- Description: {type_description}
- Key Characteristics: {characteristics}
- Ideal Size: {ideal_steps}

Design a complete framework covering:

1. FRAMEWORK NAME: a memorable name built with one of these naming styles:
   - Client-Identity (e.g., "Agency-Owner Profit Path")
   - Acronym (e.g., "S.T.A.R. Success System")
   - Number-Phase (e.g., "5-Step Growth Model")
   - Alliteration (e.g., "Profit Pipeline Process")
   - Anti-/"No-" (e.g., "No-Hustle Revenue Framework")

2. FRAMEWORK ELEMENTS: the right number of steps/pillars/stages/tiers/quadrants for a {type_key} framework:
   {instructions}

3. ELEMENT DETAILS: for every element give
   - a clear, action-oriented name
   - a brief description (1-2 sentences)
   - key activities or indicators
   - success criteria or outcomes

4. VISUAL CONCEPT: the visual concept from the {type_key} gallery that would present it best

5. IMPLEMENTATION GUIDANCE:
   - when to use this framework
   - best practices for teaching or using it
   - common pitfalls to avoid

Return a single JSON object with exactly these keys:
- name
- type
- description
- elements (array of objects with name, description, activities, success_criteria)
- visual_concept
- when_to_use
- best_practices
- pitfalls
- psychology_principle (why this framework type works psychologically)

Make it specific to {industry} and follow the {type_key} principles exactly."#,
        type_name = profile.name,
        type_description = profile.description,
        ideal_steps = profile.ideal_steps,
        industry = request.industry,
        purpose = request.purpose,
        audience = request.target_audience,
        complexity = request.complexity,
    )
}
