use crate::models::{Severity, Trigger};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
pub struct Content {
    pub advice: String,
    pub deep_insight: String,
    pub music_track: String,
}

/// Pure lookup over (trigger, severity), except the music pick which also
/// hashes the mood text so repeated entries get some variety without
/// randomness.
pub fn generate(trigger: Trigger, severity: Severity, mood_text: &str) -> Content {
    let options = music_options(severity);
    let track = options[pick_index(mood_text, options.len())];

    Content {
        advice: advice_for(severity).to_string(),
        deep_insight: format!(
            "{} {} {}",
            severity_opener(severity),
            trigger_insight(trigger, severity),
            severity_closer(severity)
        ),
        music_track: track.to_string(),
    }
}

/// Stable selection index: first 8 bytes of sha256(text), big-endian, mod the
/// candidate count. Same text and tier always yield the same track.
fn pick_index(text: &str, len: usize) -> usize {
    let digest = Sha256::digest(text.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % len as u64) as usize
}

fn advice_for(severity: Severity) -> &'static str {
    match severity {
        Severity::High => {
            "IMMEDIATE SUPPORT NEEDED:\n\
             1. Deep breathing (4-7-8 technique: inhale 4, hold 7, exhale 8)\n\
             2. Contact a trusted person immediately\n\
             3. Crisis Lifeline: 988 (call or text) or text HELLO to 741741\n\
             4. Remove yourself from immediate stressors if safe\n\
             5. Consider emergency mental health services if needed"
        }
        Severity::Medium => {
            "STRESS MANAGEMENT:\n\
             1. Journal your thoughts (10-15 minutes of free writing)\n\
             2. Take an outdoor walk (15-20 minutes, mindful movement)\n\
             3. Practice mindfulness or meditation (apps: Headspace, Calm)\n\
             4. Connect with your support network (call or text someone)\n\
             5. Limit caffeine and prioritize sleep (7-9 hours)"
        }
        Severity::Low => {
            "MAINTAIN YOUR BALANCE:\n\
             1. Continue your healthy routines and self-care practices\n\
             2. Engage in activities that bring you joy and fulfillment\n\
             3. Stay connected with friends, family, and community\n\
             4. Keep a gratitude journal (note 3 things daily)\n\
             5. Exercise regularly and maintain good sleep hygiene\n\
             6. Celebrate small wins and progress"
        }
    }
}

fn music_options(severity: Severity) -> &'static [&'static str] {
    match severity {
        Severity::High => &[
            "Weightless - Marconi Union (scientifically proven calming)",
            "Spiegel im Spiegel - Arvo Part (deeply peaceful)",
            "Clair de Lune - Debussy (gentle, soothing)",
        ],
        Severity::Medium => &[
            "Clair de Lune - Debussy (calming classical)",
            "Pure Shores - All Saints (relaxing)",
            "Nocturne in E-flat Major - Chopin (peaceful piano)",
        ],
        Severity::Low => &[
            "Here Comes The Sun - The Beatles (uplifting)",
            "Three Little Birds - Bob Marley (positive vibes)",
            "Good Vibrations - The Beach Boys (mood-boosting)",
        ],
    }
}

fn severity_opener(severity: Severity) -> &'static str {
    match severity {
        Severity::High => {
            "Your entry indicates significant emotional distress that warrants immediate attention."
        }
        Severity::Medium => {
            "Your mood reflects notable challenges that could benefit from proactive support."
        }
        Severity::Low => "Your emotional state appears stable with manageable concerns.",
    }
}

fn severity_closer(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "Remember: You deserve support and things can improve with proper help.",
        Severity::Medium => {
            "Taking proactive steps now can prevent escalation and improve your situation."
        }
        Severity::Low => {
            "Maintaining this self-awareness and continuing healthy habits will serve you well."
        }
    }
}

fn trigger_insight(trigger: Trigger, severity: Severity) -> &'static str {
    use Severity::{High, Low, Medium};
    use Trigger::*;

    match (trigger, severity) {
        (Political, High) => "Political events can deeply affect our sense of safety and control. Consider limiting news consumption and focusing on local action you can take.",
        (Political, Medium) => "Political concerns are valid. Channel this energy into constructive civic engagement or set boundaries around political media.",
        (Political, Low) => "Your political awareness is healthy. Stay informed while maintaining balance in other life areas.",

        (Work, High) => "Work-related distress at this level may indicate burnout or unsustainable conditions. Professional boundaries and support are crucial.",
        (Work, Medium) => "Work pressures are impacting your wellbeing. Time management, delegation, or discussing workload with supervisors may help.",
        (Work, Low) => "Work challenges are present but manageable. Continue using your coping strategies and maintain work-life boundaries.",

        (Health, High) => "Health concerns causing this level of distress require both medical attention and mental health support. Don't hesitate to reach out.",
        (Health, Medium) => "Health worries can be consuming. Consulting healthcare providers and practicing self-compassion are important steps.",
        (Health, Low) => "Health awareness is positive. Continue healthy routines and address concerns early with medical professionals.",

        (Relationship, High) => "Relationship conflicts at this intensity significantly impact emotional wellbeing. Couples therapy or counseling could provide valuable support.",
        (Relationship, Medium) => "Relationship challenges are affecting you. Open communication, setting healthy boundaries, and possibly counseling could help.",
        (Relationship, Low) => "Relationship dynamics have ups and downs. Your awareness suggests you're navigating this thoughtfully.",

        (Financial, High) => "Financial stress at this level can feel overwhelming. Seek support from financial counselors, trusted advisors, or mental health professionals.",
        (Financial, Medium) => "Money concerns are weighing on you. Creating a budget, exploring resources, or consulting a financial advisor may provide relief.",
        (Financial, Low) => "Financial awareness is responsible. Continue monitoring your finances and planning for future stability.",

        (Academic, High) => "Academic pressure has reached a critical point. Reach out to counselors, professors, or academic support services immediately.",
        (Academic, Medium) => "Academic stress is significant. Time management, study groups, tutoring, or speaking with instructors could ease the burden.",
        (Academic, Low) => "Academic challenges are normal. Your approach seems balanced. Continue your study habits and self-care.",

        (Family, High) => "Family dynamics causing this distress may benefit from family therapy or individual counseling to process these relationships.",
        (Family, Medium) => "Family tensions are impacting you. Setting boundaries, open dialogue when safe, or therapy can help navigate these relationships.",
        (Family, Low) => "Family relationships have complexities. Your self-awareness in managing these dynamics is healthy.",

        (Social, High) => "Social isolation or conflicts at this level need attention. Consider reaching out to trusted friends, joining groups, or seeking counseling.",
        (Social, Medium) => "Social concerns are affecting your mood. Small steps like reaching out to one person or joining an activity can make a difference.",
        (Social, Low) => "Social connections seem balanced. Continue nurturing relationships that bring you joy and support.",

        (Environmental, High) => "Environmental anxiety (eco-anxiety) is real and valid. Channeling this into action while practicing self-care is essential.",
        (Environmental, Medium) => "Environmental concerns are weighing on you. Balance staying informed with taking breaks and focusing on actionable steps.",
        (Environmental, Low) => "Environmental awareness shows your values. Continue sustainable choices while maintaining overall wellbeing.",

        (Other, High) => "You're experiencing significant distress. Professional support can help you understand and address what you're going through.",
        (Other, Medium) => "Multiple factors may be contributing to your current state. Taking time to identify specific concerns can be helpful.",
        (Other, Low) => "General life challenges are present. Your self-reflection and self-care practices are serving you well.",
    }
}
