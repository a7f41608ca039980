use gymdesk_domain::{datetime, AttendanceRecord, Booking, Member, Payment, Summary, Trainer};

fn or_none<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("Name:\t\t\t{}", self.name);
        println!("Age:\t\t\t{}", self.age);
        println!("Gender:\t\t\t{}", self.gender);
        println!("Phone:\t\t\t{}", self.phone);
        println!("Email:\t\t\t{}", self.email);
        println!("Address:\t\t{}", self.address);
        println!("Membership:\t\t{}", self.membership_type);
        println!("Trainer:\t\t{}", or_none(&self.trainer_name));
    }
}

impl PrintFormatted for Vec<Member> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:>3}\t{:<6}\t{:<14}\t{:<30}\t{:<10}\t{}",
            "ID", "Name", "Age", "Gender", "Phone", "Email", "Membership", "Trainer"
        );
        println!("{:-<140}", "-");
        for m in self {
            println!(
                "{:>4}\t{:<24}\t{:>3}\t{:<6}\t{:<14}\t{:<30}\t{:<10}\t{}",
                m.id,
                m.name,
                m.age,
                m.gender,
                m.phone,
                m.email,
                m.membership_type,
                m.trainer_name.as_deref().unwrap_or(""),
            );
        }
    }
}

impl PrintFormatted for Trainer {
    fn print_formatted(&self) {
        println!("Name:\t\t\t{}", self.name);
        println!("Experience:\t\t{} years", self.experience);
        println!("Specialization:\t\t{}", self.specialization);
        println!("Gender:\t\t\t{}", self.gender);
        println!("Phone:\t\t\t{}", self.phone);
        println!("Salary:\t\t\t{:.2}", self.salary);
    }
}

impl PrintFormatted for Vec<Trainer> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:>10}\t{:<24}\t{:<14}\t{:>12}",
            "ID", "Name", "Experience", "Specialization", "Phone", "Salary"
        );
        println!("{:-<120}", "-");
        for t in self {
            println!(
                "{:>4}\t{:<24}\t{:>10}\t{:<24}\t{:<14}\t{:>12.2}",
                t.id, t.name, t.experience, t.specialization, t.phone, t.salary
            );
        }
    }
}

impl PrintFormatted for Payment {
    fn print_formatted(&self) {
        let date = match self.date {
            Some(date) => date.format("%Y-%m-%d %H:%M").to_string(),
            None => "now".to_string(),
        };
        println!("Member:\t\t\t{}", self.member_name);
        println!("Amount:\t\t\t{:.2}", self.amount);
        println!("Date:\t\t\t{}", date);
        println!("Method:\t\t\t{}", self.payment_method);
        println!("Status:\t\t\t{}", self.status);
        println!("Service:\t\t{}", self.service_type);
    }
}

impl PrintFormatted for Vec<Payment> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:>10}\t{:<16}\t{:<6}\t{:<9}\t{}",
            "ID", "Member", "Amount", "Date", "Method", "Status", "Service"
        );
        println!("{:-<120}", "-");
        for p in self {
            let date = p
                .date
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!(
                "{:>4}\t{:<24}\t{:>10.2}\t{:<16}\t{:<6}\t{:<9}\t{}",
                p.id, p.member_name, p.amount, date, p.payment_method, p.status, p.service_type
            );
        }
    }
}

impl PrintFormatted for Vec<AttendanceRecord> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:<19}\t{:<19}\t{}",
            "ID", "Member", "Check In", "Check Out", "Duration"
        );
        println!("{:-<100}", "-");
        for a in self {
            let check_out = a
                .check_out_time
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "on site".to_string());
            println!(
                "{:>4}\t{:<24}\t{:<19}\t{:<19}\t{}",
                a.id,
                a.member_name,
                a.check_in_time.format("%Y-%m-%d %H:%M:%S"),
                check_out,
                datetime::format_duration(a.duration()),
            );
        }
    }
}

impl PrintFormatted for Booking {
    fn print_formatted(&self) {
        println!("Member:\t\t\t{}", self.member_name);
        println!("Trainer:\t\t{}", self.trainer_name);
        println!("Date:\t\t\t{}", self.class_date);
        println!(
            "Time:\t\t\t{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        );
    }
}

impl PrintFormatted for Vec<Booking> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:<24}\t{:<10}\t{:<5}\t{:<5}",
            "ID", "Member", "Trainer", "Date", "Start", "End"
        );
        println!("{:-<100}", "-");
        for b in self {
            println!(
                "{:>4}\t{:<24}\t{:<24}\t{:<10}\t{:<5}\t{:<5}",
                b.id,
                b.member_name,
                b.trainer_name,
                b.class_date,
                b.start_time.format("%H:%M"),
                b.end_time.format("%H:%M"),
            );
        }
    }
}

impl PrintFormatted for Summary {
    fn print_formatted(&self) {
        println!("Total Members:\t\t{}", self.members);
        println!("Total Trainers:\t\t{}", self.trainers);
    }
}
