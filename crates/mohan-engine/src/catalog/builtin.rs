//! Compiled-in mock dataset for the Nebula AI demo workspace.

use mohan_types::{
    AnalysisCard, CannedReply, CapacityGap, ChatPayload, DepartmentComposition, DepartmentTrace,
    DriftDetail, EvidenceItem, GapSegment, IconKind, InsightKind, MemoryAttachment,
    MemoryCategory, MemoryItem, MemoryLookup, MetricCard, ReportSection, RiskLevel, RiskSignal,
    SegmentKind, Severity, StageKind, StandupReport, StrategyContext, TeamInsight, TraceSegment,
    UserProfile, WorkflowInsight, WorkflowLog, WorkflowStage, WorkflowTrace,
};

use super::{Catalog, CannedReplies};

pub(super) fn catalog() -> Catalog {
    let memories = memories();
    Catalog {
        profile: UserProfile {
            name: "Alex Chen".into(),
            role_label: "CEO / Admin".into(),
            avatar_initials: "AC".into(),
            org: "Nebula AI".into(),
        },
        default_question: "Why is our Q3 Strategic Alignment dropping?".into(),
        manager_metrics: manager_metrics(),
        employee_metrics: employee_metrics(),
        risks: risks(),
        capacity_gap: capacity_gap(),
        strategy: StrategyContext {
            id: "strat-q3".into(),
            name: "Q3 Enterprise Market Expansion".into(),
            owner: "Alex Chen".into(),
            status: "Critical Deviation".into(),
            alignment_score: 42,
            last_updated: "Just now".into(),
            description: "Launch Enterprise SSO, Audit Logs, and achieve SOC2 Compliance.".into(),
        },
        departments: departments(),
        drifts: drifts(),
        workflows: workflows(),
        workflow_insights: workflow_insights(),
        compositions: compositions(),
        team_insights: team_insights(),
        canned: canned_replies(&memories),
        memories,
    }
}

fn manager_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Avg Cycle Time".into(),
            value: "14.2 Days".into(),
            sub: "Trace: Jira Ticket \u{2192} Git Merge".into(),
            trend: "+2d Slower".into(),
            is_good: false,
            icon: IconKind::Clock,
        },
        MetricCard {
            title: "Strategic Focus".into(),
            value: "62%".into(),
            sub: "Visual: Active Window in Core Apps".into(),
            trend: "-8% Drift".into(),
            is_good: false,
            icon: IconKind::Target,
        },
        MetricCard {
            title: "Process Friction".into(),
            value: "340 Hours".into(),
            sub: "Visual: Dwell time on Error Screens".into(),
            trend: "High Waste".into(),
            is_good: false,
            icon: IconKind::AlertTriangle,
        },
    ]
}

fn employee_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Deep Focus".into(),
            value: "4.5 Hours".into(),
            sub: "Visual: Uninterrupted IDE sessions".into(),
            trend: "+40m vs. avg".into(),
            is_good: true,
            icon: IconKind::Brain,
        },
        MetricCard {
            title: "Context Switches".into(),
            value: "23 /day".into(),
            sub: "Pattern: App changes under 2 minutes".into(),
            trend: "-6 Today".into(),
            is_good: true,
            icon: IconKind::Layers,
        },
        MetricCard {
            title: "Meeting Load".into(),
            value: "32%".into(),
            sub: "Visual: Zoom/Teams full-screen time".into(),
            trend: "+5% This Week".into(),
            is_good: false,
            icon: IconKind::Users,
        },
    ]
}

fn risks() -> Vec<RiskSignal> {
    vec![
        RiskSignal {
            id: 1,
            title: "Staging Blocked".into(),
            evidence: "Visual Signal: Engineers dwelling on 'Error 502' screens for >4h today."
                .into(),
            level: RiskLevel::Critical,
        },
        RiskSignal {
            id: 2,
            title: "Doc Context Switch".into(),
            evidence:
                "Pattern: High frequency switching (15/hr) between VS Code & Legacy Wiki.".into(),
            level: RiskLevel::Warning,
        },
        RiskSignal {
            id: 3,
            title: "Meeting Overload".into(),
            evidence: "Signal: Zoom/Teams full-screen active for >6h/day per capita.".into(),
            level: RiskLevel::Info,
        },
    ]
}

fn capacity_gap() -> CapacityGap {
    let seg = |kind, label: &str, percent| GapSegment {
        kind,
        label: label.into(),
        percent,
    };
    CapacityGap {
        planned: vec![
            seg(SegmentKind::Strategic, "70% Strategic", 70),
            seg(SegmentKind::Ops, "30% Ops", 30),
        ],
        observed: vec![
            seg(SegmentKind::Strategic, "30%", 30),
            seg(SegmentKind::Drift, "40% DRIFT", 40),
            seg(SegmentKind::Ops, "30% Ops", 30),
        ],
        status: "Critical Deviation".into(),
        explanation: "Screen Context Analysis shows roughly 400h on staging config fixes, \
                      pulling capacity away from planned Q3 roadmap work."
            .into(),
    }
}

fn segment(kind: SegmentKind, label: &str, percent: u8, drift_key: Option<&str>) -> TraceSegment {
    TraceSegment {
        kind,
        label: label.into(),
        percent,
        drift_key: drift_key.map(Into::into),
    }
}

fn departments() -> Vec<DepartmentTrace> {
    vec![
        DepartmentTrace {
            id: "dept-eng".into(),
            name: "Engineering".into(),
            total_capacity: "2,000 hrs".into(),
            segments: vec![
                segment(SegmentKind::Strategic, "Feature: SSO Dev", 30, None),
                segment(
                    SegmentKind::Drift,
                    "Tech Debt: Legacy Fixes",
                    50,
                    Some("eng_drift"),
                ),
                segment(SegmentKind::Ops, "Meetings & Interview", 20, None),
            ],
        },
        DepartmentTrace {
            id: "dept-sales".into(),
            name: "Sales".into(),
            total_capacity: "800 hrs".into(),
            segments: vec![
                segment(SegmentKind::Strategic, "Enterprise Pitching", 25, None),
                segment(
                    SegmentKind::Drift,
                    "Admin: Data Entry",
                    55,
                    Some("sales_drift"),
                ),
                segment(SegmentKind::Ops, "Internal Training", 20, None),
            ],
        },
    ]
}

fn drifts() -> Vec<DriftDetail> {
    vec![
        DriftDetail {
            key: "eng_drift".into(),
            title: "Dependency Resolution Failure".into(),
            department: "Engineering".into(),
            impact: "420 Hours / Week".into(),
            severity: Severity::High,
            observation: "VLM detects consistent patterns of 'Webpack Error' and 'Module Not \
                          Found' across 12 engineer workstations. Development environment \
                          consistency is the primary blocker."
                .into(),
            evidence: vec![
                "Screen_Log_2301.png (Error 500)".into(),
                "Jira_Idle_Time > 4h".into(),
            ],
            recommendation: "Immediate Infrastructure Freeze. Standardize Staging Environment \
                             Docker containers."
                .into(),
        },
        DriftDetail {
            key: "sales_drift".into(),
            title: "Manual Contract Processing".into(),
            department: "Sales".into(),
            impact: "180 Hours / Week".into(),
            severity: Severity::Medium,
            observation: "Sales representatives are spending 55% of screen time copying data \
                          between 'Salesforce' and 'Google Docs'. No automation detected."
                .into(),
            evidence: vec![
                "Browser_Activity: Copy/Paste Loops".into(),
                "Doc_Editor_Active > 6h".into(),
            ],
            recommendation:
                "Implement CPQ Automation tool or assign Ops support to handle data entry.".into(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn stage(
    id: &str,
    name: &str,
    tool: &str,
    duration: &str,
    kind: StageKind,
    owner: &str,
    (x, y): (u16, u16),
    insight_key: Option<&str>,
) -> WorkflowStage {
    WorkflowStage {
        id: id.into(),
        name: name.into(),
        tool: tool.into(),
        duration: duration.into(),
        kind,
        owner: owner.into(),
        x,
        y,
        insight_key: insight_key.map(Into::into),
    }
}

fn log(id: u32, timestamp: &str, app: &str, message: &str) -> WorkflowLog {
    WorkflowLog {
        id,
        timestamp: timestamp.into(),
        app: app.into(),
        message: message.into(),
    }
}

fn workflows() -> Vec<WorkflowTrace> {
    vec![
        WorkflowTrace {
            id: "wf-ticket-merge".into(),
            name: "Jira Ticket \u{2192} Git Merge".into(),
            owner: "Engineering".into(),
            total_duration: "14.2 Days".into(),
            segments: vec![
                segment(SegmentKind::Strategic, "Coding", 35, None),
                segment(SegmentKind::Drift, "Waiting on Staging", 45, Some("eng_drift")),
                segment(SegmentKind::Ops, "Review", 20, None),
            ],
            stages: vec![
                stage("s1", "Ticket Triage", "Jira", "0.5d", StageKind::Active, "PM Team", (0, 0), None),
                stage("s2", "Implementation", "VS Code", "3.1d", StageKind::Active, "Eng Squad A", (1, 0), None),
                stage("s3", "Code Review", "GitHub", "2.4d", StageKind::Queue, "Senior Eng", (2, 0), None),
                stage(
                    "s4",
                    "Staging Deploy",
                    "Jenkins",
                    "6.8d",
                    StageKind::Blocked,
                    "DevOps",
                    (3, 0),
                    Some("staging_block"),
                ),
                stage("s5", "Release", "ArgoCD", "1.4d", StageKind::Pending, "Release Mgr", (4, 0), None),
            ],
            logs: vec![
                log(1, "09:12", "Jenkins", "Build #4411 failed: Module not found 'legacy-auth'"),
                log(2, "09:47", "Chrome", "Old-Wiki page 'Staging setup (2019)' open for 38m"),
                log(3, "10:30", "Slack", "#devops thread: 'staging is down again?'"),
                log(4, "11:05", "Jenkins", "Build #4412 failed: Webpack Error in vendor bundle"),
                log(5, "13:20", "VS Code", "docker-compose.staging.yml edited 14 times"),
                log(6, "15:02", "GitHub", "PR #982 waiting for review 2d 4h"),
            ],
        },
        WorkflowTrace {
            id: "wf-lead-contract".into(),
            name: "Lead \u{2192} Signed Contract".into(),
            owner: "Sales".into(),
            total_duration: "21 Days".into(),
            segments: vec![
                segment(SegmentKind::Strategic, "Pitching", 25, None),
                segment(SegmentKind::Drift, "Manual Data Entry", 55, Some("sales_drift")),
                segment(SegmentKind::Ops, "Legal Review", 20, None),
            ],
            stages: vec![
                stage("l1", "Qualification", "Salesforce", "2d", StageKind::Active, "SDR Team", (0, 0), None),
                stage(
                    "l2",
                    "Quote Preparation",
                    "Google Docs",
                    "9d",
                    StageKind::Blocked,
                    "Account Exec",
                    (1, 0),
                    Some("manual_quote"),
                ),
                stage("l3", "Legal Review", "DocuSign", "6d", StageKind::Queue, "Legal", (2, 0), None),
                stage("l4", "Signature", "DocuSign", "4d", StageKind::Pending, "Customer", (3, 0), None),
            ],
            logs: vec![
                log(1, "08:55", "Salesforce", "Opportunity 'Acme SSO' copied to Google Docs"),
                log(2, "09:40", "Google Docs", "Quote template duplicated (v14)"),
                log(3, "11:15", "Chrome", "Copy/paste loop Salesforce <-> Docs, 42 events"),
                log(4, "14:00", "DocuSign", "Envelope waiting on legal for 3d"),
            ],
        },
    ]
}

fn workflow_insights() -> Vec<WorkflowInsight> {
    vec![
        WorkflowInsight {
            key: "staging_block".into(),
            title: "Staging Environment Instability".into(),
            severity: Severity::High,
            impact: "6.8 days added to every merge".into(),
            root_cause: "Unpinned legacy dependencies in the staging Docker image".into(),
            observation: "Deploy stage sits in 'blocked' 48% of the week. Engineers retry \
                          builds manually and consult outdated wiki pages while waiting."
                .into(),
            evidence: vec![
                "Jenkins failure rate 61% (7d)".into(),
                "Old-Wiki dwell time 320h".into(),
            ],
            recommendation: "Pin staging base image and assign a rotating staging owner.".into(),
        },
        WorkflowInsight {
            key: "manual_quote".into(),
            title: "Quote Built by Hand".into(),
            severity: Severity::Medium,
            impact: "9 days per enterprise deal".into(),
            root_cause: "No CPQ integration between Salesforce and document tooling".into(),
            observation: "Account executives rebuild quotes from templates and retype \
                          opportunity data for every revision."
                .into(),
            evidence: vec![
                "Copy/paste loops: 42 per quote".into(),
                "Template versions: 14".into(),
            ],
            recommendation: "Introduce CPQ automation for standard enterprise tiers.".into(),
        },
    ]
}

fn compositions() -> Vec<DepartmentComposition> {
    vec![
        DepartmentComposition {
            name: "Engineering".into(),
            focus: 38,
            collab: 22,
            friction: 40,
            members: 24,
        },
        DepartmentComposition {
            name: "Sales".into(),
            focus: 25,
            collab: 30,
            friction: 45,
            members: 12,
        },
        DepartmentComposition {
            name: "Design".into(),
            focus: 55,
            collab: 35,
            friction: 10,
            members: 6,
        },
        DepartmentComposition {
            name: "Customer Success".into(),
            focus: 30,
            collab: 50,
            friction: 15,
            members: 9,
        },
    ]
}

fn team_insights() -> Vec<TeamInsight> {
    vec![
        TeamInsight {
            id: 1,
            department: "Engineering".into(),
            kind: InsightKind::Burnout,
            severity: Severity::High,
            title: "After-hours staging firefights".into(),
            content: "5 engineers active in Jenkins and Slack after 22:00 on 4 of the last 5 days."
                .into(),
            action: "Rotate staging on-call and cap after-hours pages.".into(),
        },
        TeamInsight {
            id: 2,
            department: "Engineering".into(),
            kind: InsightKind::Bottleneck,
            severity: Severity::Medium,
            title: "Review queue concentrated on 2 seniors".into(),
            content: "68% of PR reviews routed to the same two reviewers.".into(),
            action: "Enable code-owner round robin.".into(),
        },
        TeamInsight {
            id: 3,
            department: "Sales".into(),
            kind: InsightKind::Focus,
            severity: Severity::High,
            title: "Selling time eroded by admin".into(),
            content: "Only 25% of screen time spent in pitch decks and customer calls.".into(),
            action: "Move data entry to Sales Ops.".into(),
        },
        TeamInsight {
            id: 4,
            department: "Design".into(),
            kind: InsightKind::Collaboration,
            severity: Severity::Low,
            title: "Healthy critique cadence".into(),
            content: "Figma co-editing sessions steady at 3 per week.".into(),
            action: "No action needed.".into(),
        },
        TeamInsight {
            id: 5,
            department: "Customer Success".into(),
            kind: InsightKind::Collaboration,
            severity: Severity::Medium,
            title: "Escalations bypass engineering triage".into(),
            content: "Direct Slack DMs to engineers up 30% week over week.".into(),
            action: "Route escalations through the support queue.".into(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn memory(
    id: u32,
    category: MemoryCategory,
    app: &str,
    timestamp: &str,
    title: &str,
    context: &str,
    keywords: &[&str],
    related_to: &[&str],
) -> MemoryItem {
    MemoryItem {
        id,
        category,
        app: app.into(),
        timestamp: timestamp.into(),
        title: title.into(),
        context: context.into(),
        keywords: keywords.iter().map(|k| (*k).into()).collect(),
        related_to: related_to.iter().map(|r| (*r).into()).collect(),
    }
}

fn memories() -> Vec<MemoryItem> {
    vec![
        memory(
            1,
            MemoryCategory::Code,
            "VS Code",
            "Today 10:42",
            "SSO callback handler refactor",
            "Edited auth/sso_callback.ts while debugging the SAML assertion parser.",
            &["sso", "saml", "auth"],
            &["Q3 Enterprise SSO"],
        ),
        memory(
            2,
            MemoryCategory::Meeting,
            "Zoom",
            "Today 09:30",
            "Staging sync with DevOps",
            "Agreed to pin the staging base image; owner still undecided.",
            &["staging", "docker", "devops"],
            &["Staging Blocked"],
        ),
        memory(
            3,
            MemoryCategory::Docs,
            "Notion",
            "Yesterday 16:10",
            "Audit log retention spec",
            "Reviewed the 90-day retention requirement for SOC2 evidence.",
            &["audit", "soc2", "retention"],
            &["Q3 Enterprise SSO"],
        ),
        memory(
            4,
            MemoryCategory::Chat,
            "Slack",
            "Yesterday 14:25",
            "#devops: staging is down again?",
            "Thread about repeated Module Not Found errors on Jenkins.",
            &["staging", "jenkins", "webpack"],
            &["Staging Blocked"],
        ),
        memory(
            5,
            MemoryCategory::Code,
            "GitHub",
            "Mon 11:02",
            "PR #982 audit log exporter",
            "Opened PR adding CSV export to the audit log API, waiting for review.",
            &["audit", "export", "review"],
            &["Doc Context Switch"],
        ),
        memory(
            6,
            MemoryCategory::Docs,
            "Chrome",
            "Mon 09:15",
            "Old-Wiki: Staging setup (2019)",
            "Consulted deprecated staging instructions for 38 minutes.",
            &["wiki", "staging", "legacy"],
            &["Doc Context Switch"],
        ),
    ]
}

fn canned_replies(memories: &[MemoryItem]) -> CannedReplies {
    let drift_alert = CannedReply {
        content: "Strategic alignment dropped 8% due to a massive shift in engineering focus \
                  towards unplanned infrastructure maintenance."
            .into(),
        payload: Some(ChatPayload::Analysis(AnalysisCard {
            summary: "Strategic alignment dropped 8% due to a massive shift in engineering \
                      focus towards unplanned infrastructure maintenance."
                .into(),
            evidence: vec![
                EvidenceItem {
                    id: 1,
                    title: "VLM Visual Signal: IDE Context Drift".into(),
                    value: "45% time spent outside Feature Branch context".into(),
                    description: "Observed high frequency of engineers working on files \
                                  unrelated to Q3 roadmap initiatives."
                        .into(),
                    icon: IconKind::Eye,
                },
                EvidenceItem {
                    id: 2,
                    title: "VLM Pattern: Legacy App Dwell Time".into(),
                    value: "320 total hours on 'Old-Wiki' & 'Staging-Logs'".into(),
                    description: "Screen analysis detected prolonged dwell times on \
                                  documentation and log tools for deprecated systems."
                        .into(),
                    icon: IconKind::Clock,
                },
            ],
            recommendation: "Immediate freeze on non-critical legacy maintenance. Redirect \
                             focus back to Q3 initiatives and provide dedicated support for \
                             staging environment stabilization."
                .into(),
        })),
    };

    let standup = CannedReply {
        content: "Here is your standup draft, assembled from today's screen activity.".into(),
        payload: Some(ChatPayload::Report(StandupReport {
            title: "Daily Standup".into(),
            date_label: "Today".into(),
            sections: vec![
                ReportSection {
                    heading: "Yesterday".into(),
                    bullets: vec![
                        "Reviewed audit log retention spec (SOC2)".into(),
                        "Opened PR #982: audit log CSV export".into(),
                    ],
                },
                ReportSection {
                    heading: "Today".into(),
                    bullets: vec![
                        "Finish SSO callback handler refactor".into(),
                        "Pair with DevOps on staging image pinning".into(),
                    ],
                },
                ReportSection {
                    heading: "Blockers".into(),
                    bullets: vec!["Staging deploys failing with Module Not Found".into()],
                },
            ],
        })),
    };

    let attachments = memories
        .iter()
        .filter(|item| item.keywords.iter().any(|k| k == "staging"))
        .map(|item| MemoryAttachment {
            memory_id: item.id,
            title: item.title.clone(),
            app: item.app.clone(),
            timestamp: item.timestamp.clone(),
            category: item.category,
        })
        .collect();

    let memory_lookup = CannedReply {
        content: "I found these moments in your recent screen history.".into(),
        payload: Some(ChatPayload::Memory(MemoryLookup {
            summary: "You last worked on the staging issue during the DevOps sync and in the \
                      #devops thread."
                .into(),
            attachments,
        })),
    };

    CannedReplies {
        drift_alert,
        standup,
        memory_lookup,
    }
}
