//! Markdown bodies for the template catalog.
//!
//! Bodies intentionally exercise the whole restricted Markdown dialect the
//! renderer supports (headings, lists, quotes, emphasis, links, images,
//! fenced code) so the fallback path doubles as a rendering smoke test.

pub(crate) const RECRUITMENT_INDIA: &str = r#"![Recruitment landscape in India](/assets/generated/article-recruitment-india.dim_1600x900.png)

## Quick Scan: What's Changing

India's recruitment landscape is undergoing its fastest transformation in a decade. Hiring is now defined by three forces: **skills-first hiring**, **AI-driven screening**, and **rapid hiring cycles**. Companies across tech, BFSI, GCCs, e-commerce, and logistics are shifting from pedigree-based hiring to capability-based assessments.

> "The shift from credentials to capabilities is not just a trend. It is the new baseline for competitive hiring in India." — Industry Report 2025

## The Three Forces Reshaping Recruitment

### 1. Skills-First Hiring Takes Center Stage

Traditional hiring focused on degrees, brand names, and years of experience. That model is breaking down. Employers now prioritize:

- **Demonstrated capabilities** over academic pedigree
- **Portfolio evidence** and project work
- **Skill assessments** integrated into screening
- **Micro-credentials** from online learning platforms

**Why this matters:** digital skills remain the engine of demand. Roles in data analytics, cloud infrastructure, cybersecurity, and AI/ML are growing 40% year over year, but talent supply lags behind.

### 2. AI-Driven Screening Becomes Standard

High application volumes have made AI screening standard practice. Recruiters use analytics to:

1. Shortlist candidates faster
2. Reduce unconscious bias
3. Match skills to job requirements with precision
4. Predict candidate success and retention likelihood

### 3. Rapid Hiring Cycles and Candidate Expectations

Candidates now expect transparency in job descriptions, feedback within 72 hours, and hybrid work clarity upfront. For employers this means streamlined interview stages, clear communication, and competitive offer timelines.

---

## What This Means for 2026

The recruitment landscape will continue to favor organizations that embrace technology without losing the human touch and build diverse talent pipelines proactively. Read the companion piece on [attrition](/articles/attrition-india-why-employees-leave) for the retention side of the same story.
"#;

pub(crate) const ATTRITION_INDIA: &str = r#"## The Retention Problem Nobody Budgets For

Indian employers lose between 18% and 28% of their workforce every year, depending on sector. Each departure costs between six and nine months of salary once hiring, onboarding, and lost productivity are counted.

### Why People Actually Leave

Exit interviews consistently surface the same five reasons:

- Compensation that lags the external market
- No visible growth path within eighteen months
- Manager quality and day-to-day friction
- Inflexible work arrangements
- Burnout from chronic understaffing

> Attrition is a lagging indicator. By the time a resignation letter arrives, the decision was made months earlier.

### What the Data Shows

Organizations that run structured *stay interviews* at the six-month mark cut regrettable attrition by a third. The mechanics matter less than the cadence: a predictable, honest conversation beats a glossy engagement survey.

1. Ask what would make the person leave
2. Ask what currently keeps them
3. Write both answers down and act on one of them

### The Manager Multiplier

People leave managers, not companies. Training first-line managers in feedback and workload balancing is the single highest-leverage retention spend available. It is also the most commonly skipped.

---

Retention is recruitment's quieter twin. Fixing it is cheaper than rehiring, and the playbook fits on one page.
"#;

pub(crate) const INVARIANT_ATTRITION: &str = r#"## Predicting Departures Before They Happen

INVARIANT applies layered analysis to workforce signals and flags attrition risk while there is still time to act. The system watches observable patterns only: tenure curves, compensation position, internal mobility, and team-level churn.

### How the Layers Divide the Work

Each layer has a single responsibility:

- **Layer 1** explores the full possibility space of risk factors without filtering
- **Layer 2** enforces governance limits on which interventions may be suggested
- **Layer 3** verifies each claim against live workforce data
- **Layer 4** executes only the authorized, human-approved actions

> No single layer can both decide and act. That separation is the point.

### What a Risk Flag Looks Like

A flag is a short structured note to an HR partner:

```
employee_cohort: engineering / 2-3y tenure
signal: comp below 40th percentile, 2 peer exits in 90 days
suggested_action: schedule stay interview within 2 weeks
confidence: medium
```

The cohort framing is deliberate. Individual surveillance is out of scope by design, and flags degrade to team-level aggregates whenever the cohort is small enough to identify a person.

### Measured Outcomes

Early deployments report a 20% to 30% reduction in regrettable attrition within the flagged cohorts, with the largest gains in the two-to-four-year tenure band where replacement costs peak.
"#;

pub(crate) const INVARIANT_ARCHITECTURE: &str = r#"## A Quad-Core Design for Trustworthy Automation

INVARIANT is built as four isolated layers, each with a narrow contract. The layers are VAR, ACE, TRUTH, and FLUIDINTEL internally; public material refers to them by number.

### The Four Layers

1. **Layer 1** — generative exploration. Produces candidate hypotheses without judging them.
2. **Layer 2** — governance. Applies policy limits and decides *when* a decision may be taken.
3. **Layer 3** — verification. Checks every claim against real-time data sources before it propagates.
4. **Layer 4** — execution. Performs only actions that passed governance and verification, with no interpretation of its own.

### Why Separation Beats a Monolith

A single model asked to imagine, judge, verify, and act will blur those roles under pressure. Separating them makes each contract independently testable:

```rust
fn propagate(claim: Claim) -> Option<Action> {
    let verified = verify(claim)?;   // Layer 3
    let approved = govern(verified)?; // Layer 2
    Some(execute(approved))           // Layer 4
}
```

The code above is illustrative, but the invariant it encodes is real: nothing reaches execution without passing verification and governance in that order.

> An architecture is trustworthy when its failure modes are boring.

### Data Flow

Signals enter at Layer 1 and can only move forward. There is no path from execution back into exploration, which rules out the classic feedback loop where a system learns to justify its own actions.

Further reading: the [attrition case study](/articles/invariant-reduces-attrition) shows the architecture applied to a concrete workforce problem.
"#;

pub(crate) const FUTURE_OF_AI: &str = r#"![Abstract illustration of automated hiring](/assets/generated/article-future-ai.dim_1600x900.png)

## Beyond Resume Screening

The first wave of AI in recruitment was keyword matching dressed up as intelligence. The next wave is different in kind, not just degree.

### Three Shifts Underway

- **From filtering to forecasting** — systems that estimate on-the-job success rather than resume similarity
- **From black boxes to audit trails** — every automated decision carries an explanation a candidate could read
- **From replacement to augmentation** — recruiters spend their hours on conversations, not triage

### The Bias Question

Automated screening inherits the biases of its training data unless actively corrected. Practical countermeasures exist today:

1. Audit screening outcomes by demographic slice every quarter
2. Strip proxy variables (postcode, school name) before scoring
3. Keep a human decision point before any rejection

> The goal is not unbiased AI. The goal is measurably less biased processes than the manual ones they replace.

### What To Watch Through 2027

Regulation will require explainability for automated hiring decisions in most major markets. Teams that built audit trails early will treat this as paperwork; teams that did not will treat it as a rewrite.

The winners will be organizations that treat AI as an instrument panel for human recruiters, not an autopilot.
"#;
