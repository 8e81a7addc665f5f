//! FAQ entries shown on the FAQs page.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: u32,
    pub question: String,
    pub answer: String,
}

impl Faq {
    fn new(id: u32, question: &str, answer: &str) -> Self {
        Self {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// The built-in FAQ list.
pub fn demo_faqs() -> Vec<Faq> {
    vec![
        Faq::new(
            1,
            "What does the health monitor track?",
            "The health monitor continuously tracks the status of all critical system components \
             including API servers, databases, authentication services, payment gateways, and more. \
             It monitors uptime, response times, and overall system health to ensure smooth operations.",
        ),
        Faq::new(
            2,
            "How often are the health checks performed?",
            "Health checks are performed every 30 seconds for all services. Critical services like \
             the main API and authentication service are checked every 15 seconds to ensure \
             immediate detection of any issues.",
        ),
        Faq::new(
            3,
            "What do the different status colors mean?",
            "Green indicates a healthy service with normal operations and good response times. Red \
             indicates a failed or critical service that requires immediate attention. Yellow (if \
             present) indicates a warning state where the service is running but experiencing \
             degraded performance.",
        ),
        Faq::new(
            4,
            "How are you notified of failures?",
            "When a service fails, the system automatically sends notifications through multiple \
             channels including email, SMS, and Slack messages. Critical failures trigger immediate \
             alerts to the on-call team, while minor issues are logged for review during business hours.",
        ),
        Faq::new(
            5,
            "Can I view historical health data?",
            "Yes, the system maintains a complete history of all health checks and status changes. \
             You can access detailed logs, generate reports, and view trends over time to identify \
             patterns and potential issues before they become critical.",
        ),
        Faq::new(
            6,
            "What is considered a healthy uptime percentage?",
            "We aim for 99.9% uptime (three nines) for critical services, which allows for \
             approximately 43 minutes of downtime per month. Services below 99% uptime are flagged \
             for investigation and improvement.",
        ),
        Faq::new(
            7,
            "How do I add a new service to monitor?",
            "New services can be added through the configuration panel in the admin settings. \
             You'll need to specify the service name, endpoint URL, expected response codes, timeout \
             thresholds, and notification preferences. Once configured, monitoring begins automatically.",
        ),
        Faq::new(
            8,
            "What happens during scheduled maintenance?",
            "During scheduled maintenance windows, you can temporarily suppress alerts for specific \
             services. The system will continue to monitor and log data, but won't trigger \
             notifications. Maintenance windows should be scheduled in advance and communicated to \
             all stakeholders.",
        ),
        Faq::new(
            9,
            "Can I customize alert thresholds?",
            "Yes, alert thresholds are fully customizable per service. You can set custom values for \
             response time warnings, error rate thresholds, and uptime requirements based on the \
             criticality and expected performance of each service.",
        ),
        Faq::new(
            10,
            "Is the monitoring data secure?",
            "All monitoring data is encrypted at rest and in transit. Access to the admin panel is \
             restricted through multi-factor authentication, and all actions are logged for audit \
             purposes. Sensitive information in health check responses is automatically redacted.",
        ),
    ]
}
