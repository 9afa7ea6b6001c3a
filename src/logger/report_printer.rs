use crate::enums::priority::Priority;
use crate::enums::status::Status;
use crate::services::report_presenter::ReportPresenter;
use crate::services::status_classifier::StatusClassifier;
use crate::structs::dashboard::audit_card::AuditCard;
use crate::structs::report::audit_report::AuditReport;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print_report(report: &AuditReport, classifier: &StatusClassifier) {
        let view = ReportPresenter::dashboard(report, classifier);

        println!("\n📊 Audit report for {}", report.url);
        println!("{}", RULE);

        for tile in &view.header {
            println!("  {:<16} {:>8}  {}", tile.title, tile.value, tile.trend);
        }

        println!("\n🔧 Technical Insights");
        view.technical_cards.iter().for_each(Self::print_card);

        println!("\n📣 Marketing Strategy");
        view.marketing_cards.iter().for_each(Self::print_card);

        let ai = &report.ai_readiness;
        println!("\n🤖 AI Readiness (AEO {}): {}", ai.aeo_score, ai.impact_label);
        println!("   JSON-LD: {}", ai.json_ld_type);

        println!("\n💰 Revenue impact: {} ({})", report.revenue_impact.projection, report.revenue_impact.factor);

        println!("\n🗓️  30-day roadmap");
        for item in &report.roadmap_30_days {
            let marker = match item.priority {
                Priority::High => "\x1b[31mHIGH\x1b[0m  ",
                Priority::Normal => "NORMAL",
            };
            println!("  [{}] days {:<6} {:<13} {}", marker, item.day, item.target, item.task);
        }

        println!("\n🔒 Trust checklist");
        for check in &report.trust_checklist {
            println!("  {} {}", if check.status { "✅" } else { "❌" }, check.item);
        }

        println!("{}", RULE);
    }

    fn print_card(card: &AuditCard) {
        let color = match card.status {
            Status::Success => "\x1b[32m",
            Status::Warning => "\x1b[33m",
            Status::Critical => "\x1b[31m",
            Status::Info => "\x1b[36m",
        };
        println!("  {} {:<18} {}{:<9}\x1b[0m {}", card.status.emoji(), card.title, color, card.badge, card.description);
    }
}
