/// Contribution calendar for the trailing year plus the languages of the
/// user's most recently updated repositories.
pub const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!) {
    user(login: $username) {
        contributionsCollection {
            contributionCalendar {
                totalContributions
                weeks {
                    contributionDays {
                        contributionCount
                        date
                    }
                }
            }
        }
        repositories(first: 100, ownerAffiliations: [OWNER, COLLABORATOR, ORGANIZATION_MEMBER], privacy: null, orderBy: {field: UPDATED_AT, direction: DESC}) {
            nodes {
                name
                languages(first: 50, orderBy: {field: SIZE, direction: DESC}) {
                    edges {
                        size
                        node {
                            name
                            color
                        }
                    }
                }
            }
        }
    }
}
"#;
