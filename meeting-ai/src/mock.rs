//! Canned demo provider for offline runs and tests.

use crate::traits::{SummarizationProvider, TranscriptionProvider};
use crate::Error;
use async_trait::async_trait;
use log::info;
use summary_engine::{Priority, RawActionItem, RawSummary};

/// Demo transcript of a project kickoff meeting.
pub fn demo_transcript() -> &'static str {
    r#"Meeting Transcript - Project Kickoff Discussion

John: Good morning everyone, welcome to our Q1 project kickoff meeting. I'm John, the project manager, and I'll be leading this discussion today.

Sarah: Hi everyone, I'm Sarah from the development team. Looking forward to getting started on this new initiative.

Mike: Mike here, representing the design team. We've been working on some initial mockups that I'd like to share.

John: Perfect. Let's start with the project overview. We're building a new customer portal that will streamline our order processing system. The goal is to reduce order processing time by 50% and improve customer satisfaction scores.

Sarah: From a technical perspective, we're looking at a 12-week development cycle. We'll need to integrate with our existing ERP system and build a new API layer. If we start development next week, we can have a beta version ready by week 8, and full launch by week 12. But we'll need to finalize the API specifications by Friday.

Mike: The design team has created wireframes for the main user flows. We're focusing on a mobile-first approach since 70% of our customers access the portal from mobile devices. I can have the final design mockups ready by Wednesday.

John: Excellent. Let's set some action items. Sarah, can you prepare the technical specifications document by Friday?

Sarah: Yes, I'll have that ready. I'll also need to coordinate with the DevOps team about deployment infrastructure.

Mike: I'll prepare the design system documentation and component library. Should be ready by Wednesday as mentioned.

Sarah: One more thing - we should set up automated testing from the beginning. It will save us time in the long run.

John: Absolutely. Let's schedule a follow-up meeting for next Tuesday to review progress. Thanks everyone for your time.

Meeting ended at 10:30 AM."#
}

/// Demo raw summary matching the demo transcript.
pub fn demo_summary() -> RawSummary {
    RawSummary {
        summary: "Project kickoff meeting for a new customer portal initiative aimed at \
                  reducing order processing time by 50% and improving customer satisfaction."
            .to_string(),
        topics_discussed: vec![
            "Project overview and objectives".to_string(),
            "Technical requirements and development timeline".to_string(),
            "Design approach and mobile-first strategy".to_string(),
            "Resource allocation and team coordination".to_string(),
        ],
        key_decisions: vec![
            "12-week development cycle approved".to_string(),
            "Mobile-first design approach confirmed".to_string(),
            "Beta launch scheduled for week 8".to_string(),
            "Full launch targeted for week 12".to_string(),
        ],
        action_items: vec![
            RawActionItem {
                task: "Prepare technical specifications document".to_string(),
                owner: Some("Sarah".to_string()),
                deadline: "Friday".to_string(),
                priority: Some(Priority::High),
            },
            RawActionItem {
                task: "Finalize design mockups and prepare design system".to_string(),
                owner: Some("Mike".to_string()),
                deadline: "Wednesday".to_string(),
                priority: Some(Priority::High),
            },
            RawActionItem {
                task: "Coordinate with DevOps team for deployment infrastructure".to_string(),
                owner: Some("Sarah".to_string()),
                deadline: "Next week".to_string(),
                priority: Some(Priority::Medium),
            },
            RawActionItem {
                task: "Set up automated testing framework".to_string(),
                owner: Some("Sarah".to_string()),
                deadline: "Week 2".to_string(),
                priority: Some(Priority::Medium),
            },
        ],
        next_steps: "Schedule follow-up meeting for next Tuesday to review progress and \
                     address any blockers."
            .to_string(),
    }
}

/// Provider returning the canned demo data without any network access.
///
/// Used directly in demo mode and as the fallback source when a real
/// provider fails.
#[derive(Debug, Default)]
pub struct MockProvider;

#[async_trait]
impl TranscriptionProvider for MockProvider {
    async fn transcribe(&self, audio_ref: &str) -> Result<String, Error> {
        info!("Mock transcription for {audio_ref}");
        Ok(demo_transcript().to_string())
    }

    fn provider_id(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl SummarizationProvider for MockProvider {
    async fn summarize(&self, _transcript: &str) -> Result<RawSummary, Error> {
        info!("Mock summarization");
        Ok(demo_summary())
    }

    fn provider_id(&self) -> &str {
        "mock"
    }
}
