use leptos::prelude::*;

/// Page-level styles for the decorative animations
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Navigation entrance */
            @keyframes nav-slide-in {
                from { transform: translateY(-80px); }
                to { transform: translateY(0); }
            }

            .nav-slide-in {
                animation: nav-slide-in 0.5s ease-out;
            }

            /* Hero entrance sequence */
            @keyframes hero-logo-in {
                from { transform: scale(0) rotate(-180deg); }
                70% { transform: scale(1.08) rotate(8deg); }
                to { transform: scale(1) rotate(0); }
            }

            @keyframes hero-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            @keyframes hero-rise-in {
                from { opacity: 0; transform: translateY(24px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .hero-logo-in { animation: hero-logo-in 0.8s ease-out both; }
            .hero-fade-in { animation: hero-fade-in 0.6s ease-out both; }
            .hero-rise-in { animation: hero-rise-in 0.8s ease-out both; }

            .hero-delay-300 { animation-delay: 0.3s; }
            .hero-delay-500 { animation-delay: 0.5s; }
            .hero-delay-800 { animation-delay: 0.8s; }
            .hero-delay-1100 { animation-delay: 1.1s; }
            .hero-delay-2000 { animation-delay: 2s; }

            /* Background motion */
            @keyframes blob {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(30px, -50px) scale(1.1); }
                66% { transform: translate(-20px, 20px) scale(0.9); }
            }

            .animate-blob { animation: blob 7s infinite; }
            .animation-delay-2000 { animation-delay: 2s; }
            .animation-delay-4000 { animation-delay: 4s; }

            @keyframes float {
                0%, 100% { transform: translateY(0); opacity: 0.3; }
                50% { transform: translateY(-20px); opacity: 1; }
            }

            .animate-float { animation: float 6s ease-in-out infinite; }

            @keyframes pulse-glow {
                0%, 100% { transform: scale(1); }
                50% { transform: scale(1.2); }
            }

            .animate-pulse-glow { animation: pulse-glow 2s ease-in-out infinite; }

            @keyframes scroll-hint {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(8px); }
            }

            .animate-scroll-hint { animation: scroll-hint 1.5s ease-in-out infinite; }

            @media (prefers-reduced-motion: reduce) {
                .animate-blob, .animate-float, .animate-pulse-glow, .animate-scroll-hint {
                    animation: none;
                }
            }
            "#
        </style>
        // Without scripts nothing would ever reveal the sections
        <noscript>
            <style>
                "[data-reveal] { opacity: 1 !important; transform: none !important; }"
            </style>
        </noscript>
    }
}
