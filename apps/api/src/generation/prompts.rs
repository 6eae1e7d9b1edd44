// Prompt template for marketing copy generation.
// Placeholders: {profile}, {employee_range}, {industry}, {role}, {tagline}

pub const MARKETING_PROMPT_TEMPLATE: &str = r#"You are a marketing content specialist for Accrue, an HR and payroll solutions company.

Generate targeted marketing content for the following customer profile:
- Business Size: {profile} business ({employee_range} employees)
- Industry: {industry}
- Target Role: {role}

Accrue's tagline is: "{tagline}"

Generate content that addresses the specific pain points and needs of this profile. The content should be:
- Specific to their industry challenges
- Appropriate for their role and decision-making authority
- Focused on Accrue's HR, payroll, time tracking, and workforce management solutions

Return EXACTLY in this JSON format (no additional text):
{
  "headlines": [3 compelling headlines that grab attention],
  "painPoints": [4 specific pain points this profile experiences],
  "benefits": [3 key benefits Accrue provides for this profile],
  "ctas": [3 strong call-to-action phrases]
}

Make the content highly specific and actionable for the {industry} industry."#;
