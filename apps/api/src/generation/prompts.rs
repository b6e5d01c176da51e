// All LLM prompt text for the generation module.
// Cross-cutting fragments come from llm_client::prompts.

pub const RESUME_PARSE_ROLE: &str = "You are an expert resume analyst. \
    Extract structured information from a resume exactly as written.";

/// Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following resume and return a JSON object with this EXACT schema:
{
  "full_name": "Jane Doe",
  "headline": "Senior Backend Engineer",
  "summary": "One or two sentences from the resume's own summary, or null",
  "email": "jane@example.com",
  "location": "Berlin, Germany",
  "skills": ["Rust", "PostgreSQL"],
  "experiences": [
    {
      "company": "Acme",
      "title": "Backend Engineer",
      "start_date": "2021-03",
      "end_date": null,
      "description": "What the role covered, in one or two sentences",
      "achievements": ["Reduced p99 latency by 40%"],
      "technologies": ["Rust", "Kafka"]
    }
  ],
  "projects": [
    {
      "name": "rate-limiter",
      "url": null,
      "technologies": ["Redis"],
      "highlights": ["Used in production by 3 teams"]
    }
  ],
  "education": [
    {"institution": "TU Berlin", "degree": "BSc", "field": "Computer Science", "graduation_year": 2018}
  ]
}

Rules:
- Use null for anything the resume does not state. Use [] for empty lists.
- `end_date` is null for a current position.
- Copy metrics verbatim. Do not round or embellish.
- `technologies` lists only tools named in that role or project.

RESUME:
{resume_text}"#;

pub const JOB_PARSE_ROLE: &str = "You are an expert job description analyst. \
    Extract the hiring team's requirements and the problems the role exists to solve.";

/// Replace `{job_text}` before sending.
pub const JOB_PARSE_PROMPT_TEMPLATE: &str = r#"Parse the following job description and return a JSON object with this EXACT schema:
{
  "title": "Staff Platform Engineer",
  "company": "Globex",
  "seniority": "staff",
  "required_skills": ["Kubernetes", "Go"],
  "preferred_skills": ["Terraform"],
  "responsibilities": ["Own the deployment platform used by 200 engineers"],
  "business_problems": ["Release cadence is slowed by manual deploys"],
  "company_values": ["Bias for action"]
}

Rules:
- REQUIRED SKILLS: explicit must-haves ("required", "must have", minimum years).
- PREFERRED SKILLS: nice-to-haves ("preferred", "bonus", "a plus").
- Skills are short technology or discipline names, one per entry.
- RESPONSIBILITIES: short phrases describing day-to-day work.
- BUSINESS PROBLEMS: the underlying problems this hire is meant to solve, inferred only from the text.
- SENIORITY: "junior", "mid", "senior", "staff", "principal", "director", or "unknown".
- Use null for unknown scalars and [] for empty lists.

JOB DESCRIPTION:
{job_text}"#;

pub const PAGE_CONTENT_ROLE: &str = "You are a senior career copywriter. \
    You write concise, specific landing pages that pitch one candidate for one role.";

/// Replace: {grounding_instruction}, {resume_json}, {job_json}, {match_json}
pub const PAGE_CONTENT_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

PARSED RESUME:
{resume_json}

TARGET ROLE:
{job_json}

MATCH ANALYSIS (lead with matched skills, never claim missing ones):
{match_json}

Write a personal landing page for this candidate addressed to the hiring team. Return a JSON object:
{
  "headline": "Jane Doe, the platform engineer who cut Acme's deploy time in half",
  "pitch": "Two or three sentences on why this candidate fits this role.",
  "sections": [
    {
      "title": "Shipping reliable infrastructure",
      "body": "Short paragraph tying one resume achievement to one business problem.",
      "evidence": ["Reduced p99 latency by 40%"]
    }
  ],
  "call_to_action": "One sentence inviting the hiring manager to talk."
}

HARD RULES:
1. `headline` and `pitch` are required and non-empty.
2. Between 2 and 4 sections. Each section maps to a business problem or responsibility.
3. Every `evidence` string is copied from the resume achievements or highlights.
4. Never mention skills listed under missing_skills as strengths."#;

pub const INTERVIEW_PREP_ROLE: &str = "You are an experienced hiring manager \
    preparing a candidate for an interview loop.";

/// Replace: {resume_json}, {job_json}, {missing_skills}
pub const INTERVIEW_PREP_PROMPT_TEMPLATE: &str = r#"PARSED RESUME:
{resume_json}

TARGET ROLE:
{job_json}

SKILL GAPS the interviewer is likely to dig into:
{missing_skills}

Generate likely interview questions. Return a JSON object:
{
  "questions": [
    {
      "category": "technical",
      "question": "How would you design a zero-downtime deploy pipeline?",
      "talking_point": "Reference the Acme deploy migration and its 50% time reduction."
    }
  ]
}

Rules:
- `category` is one of "technical", "behavioral", "gap".
- 8 to 12 questions in total, at least 3 behavioral.
- One "gap" question per skill gap listed above (max 4). Its talking point suggests adjacent experience from the resume, honestly.
- Talking points reference concrete resume facts only."#;

pub const OUTREACH_EMAIL_ROLE: &str = "You are a career coach who writes short, \
    specific emails from candidates to hiring managers.";

/// Replace: {grounding_instruction}, {resume_json}, {job_json}, {matched_skills},
/// {page_url}, {recipient}, {email_instructions}
pub const OUTREACH_EMAIL_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

PARSED RESUME:
{resume_json}

TARGET ROLE:
{job_json}

STRONGEST MATCHED SKILLS:
{matched_skills}

CANDIDATE PAGE: {page_url}
RECIPIENT: {recipient}

{email_instructions}

Return a JSON object:
{
  "subject": "Platform engineer who halved Acme's deploy time",
  "body": "Hi Sam,\n\n...\n\nBest,\nJane"
}

Rules:
- `subject` is at most 80 characters and names one concrete result.
- `body` is plain text, 90 to 160 words, written in the first person.
- Include the candidate page URL exactly once in `body`.
- No placeholders such as [Name] or [Company]."#;

pub const APPLICATION_EMAIL_INSTRUCTIONS: &str = "Write a first-contact email applying \
    for the role. Lead with the result that best matches the role's business problems.";

pub const FOLLOW_UP_EMAIL_INSTRUCTIONS: &str = "Write a polite follow-up to an application \
    sent a week ago. Add one new detail from the resume that was not the obvious headline.";

pub const CAREER_ASSETS_ROLE: &str = "You are a career strategist. You mine resumes \
    for reusable proof points a candidate can bring to any application.";

/// Replace: {resume_json}, {job_skills}
pub const CAREER_ASSETS_PROMPT_TEMPLATE: &str = r#"PARSED RESUME:
{resume_json}

SKILLS THE CURRENT TARGET ROLE CARES ABOUT:
{job_skills}

Extract career assets. Return a JSON object:
{
  "assets": [
    {
      "kind": "achievement",
      "title": "Halved deploy time",
      "detail": "Moved Acme's deploy pipeline to Argo CD, cutting deploys from 40 to 20 minutes.",
      "skills": ["Kubernetes", "Argo CD"],
      "source": "Acme, Backend Engineer"
    }
  ]
}

Rules:
- `kind` is one of "achievement", "story", "differentiator".
- "achievement": a measurable result, copied with its metric.
- "story": a short STAR narrative that answers a behavioral question.
- "differentiator": something few candidates for this role would have.
- 6 to 12 assets. `source` names the employer, project or education entry it came from.
- `skills` lists only technologies or skills named in that resume entry."#;
